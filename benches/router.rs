use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use vhost_router::Router;

fn router_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-resolve");

    group.bench_function("static-route", |b| {
        let router: Router<usize> = Router::new();
        router.bind("/hello/world", 1).unwrap();
        b.iter_with_large_drop(|| router.resolve("localhost", "GET", "/hello/world"))
    });

    group.bench_function("single-param", |b| {
        let router: Router<usize> = Router::new();
        router.bind("/hello/:name", 1).unwrap();
        b.iter_with_large_drop(|| router.resolve("localhost", "GET", "/hello/world"))
    });

    group.bench_function("wildcard-fallback", |b| {
        let router: Router<usize> = Router::new();
        router.bind("/a/:id/edit", 1).unwrap();
        router.bind("/a/*rest", 2).unwrap();
        b.iter_with_large_drop(|| router.resolve("localhost", "GET", "/a/1/b/c/d"))
    });
}

fn router_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-bind");

    group.bench_function("single-param", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.bind("/hello/:name", 1).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_resolve, router_bind);
criterion_main!(benches);
