use axum::body::Body;
use axum::http::Request;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dnsnet::dns::{DomainName, Resolution, Resolve, Resolving, Strategy};
use dnsnet::http::create_router;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tower::ServiceExt;

struct FixedResolver;

impl Resolve for FixedResolver {
    fn resolve(&self, name: DomainName) -> Resolving {
        Box::pin(async move {
            Ok(Resolution::new(
                name,
                vec![
                    IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)),
                    IpAddr::V4(Ipv4Addr::new(192, 0, 2, 2)),
                ],
            ))
        })
    }

    fn strategy(&self) -> Strategy {
        Strategy::Direct
    }
}

fn bench_route(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = create_router(Arc::new(FixedResolver));
    let mut group = c.benchmark_group("route");

    let paths = vec![
        "/resolve/example.com",
        "/resolve/sub.example.co.uk",
        "/resolve/xn--bcher-kva.example",
        "/resolve/ex%61mple.com",
        "/resolve/",
        "/health",
    ];

    group.bench_function("mixed_paths", |b| {
        b.to_async(&rt).iter(|| async {
            for path in &paths {
                let req = Request::get(*path).body(Body::empty()).unwrap();
                black_box(app.clone().oneshot(req).await.unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_route);
criterion_main!(benches);
