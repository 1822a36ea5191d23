use catalog::{parse_product_id, MemoryProductStore, PageRequest, ProductInput, ProductStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime; // To run async code within Criterion

fn sample_input(n: i64) -> ProductInput {
  ProductInput {
    user_id: n,
    product_name: format!("Product {}", n),
    product_description: "Benchmark product".to_string(),
    product_images: vec!["front.jpg".to_string(), "back.jpg".to_string()],
    product_price: 9.99,
  }
}

// --- Benchmark Functions ---

fn bench_request_parsing(c: &mut Criterion) {
  let mut group = c.benchmark_group("RequestParsing");
  group.bench_function("parse_product_id", |b| b.iter(|| parse_product_id(black_box(" 12345 "))));
  group.bench_function("page_request_from_raw", |b| {
    b.iter(|| PageRequest::from_raw(black_box(Some("7")), black_box(Some("25"))).offset())
  });
  group.finish();
}

fn bench_memory_store_list(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("MemoryStoreList");

  for rows in [100i64, 10_000].iter() {
    let store = MemoryProductStore::new();
    rt.block_on(async {
      for n in 0..*rows {
        store.create(&sample_input(n)).await.unwrap();
      }
    });

    for limit in [10i64, 100].iter() {
      group.throughput(Throughput::Elements(*limit as u64));
      group.bench_with_input(
        BenchmarkId::new(format!("rows_{}", rows), format!("limit_{}", limit)),
        limit,
        |b, &limit| {
          // Last full page, so the skip cost is included.
          let page = PageRequest::new(*rows / limit, limit);
          b.to_async(&rt).iter(|| async { store.list(page).await.unwrap() });
        },
      );
    }
  }
  group.finish();
}

fn bench_memory_store_create(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let store = MemoryProductStore::new();
  let input = sample_input(1);

  let mut group = c.benchmark_group("MemoryStoreCreate");
  group.bench_function("create", |b| {
    b.to_async(&rt).iter(|| async { store.create(&input).await.unwrap() });
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_request_parsing,
  bench_memory_store_list,
  bench_memory_store_create
);
criterion_main!(benches);
