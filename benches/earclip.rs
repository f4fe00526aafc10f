use criterion::{criterion_group, criterion_main, Criterion};

use art_gallery::algorithms::triangulate;
use art_gallery::{Point, Ring};

// A comb with `teeth` rectangular notches along the top; every notch adds
// reflex corners, the expensive case for ear scanning.
fn comb(teeth: i64) -> Ring {
  let mut points: Vec<Point> = vec![(0, 0).into(), (4 * teeth, 0).into()];
  for i in (0..teeth).rev() {
    let x = 4 * i;
    points.push((x + 4, 4).into());
    points.push((x + 3, 4).into());
    points.push((x + 3, 2).into());
    points.push((x + 1, 2).into());
    points.push((x + 1, 4).into());
    points.push((x, 4).into());
  }
  // neighbouring teeth share their junction vertex
  Ring::new(points).dedup_consecutive()
}

pub fn earclip_bench(c: &mut Criterion) {
  let small = comb(4);
  let large = comb(16);
  c.bench_function("earclip comb 4", |b| b.iter(|| triangulate(&small).unwrap()));
  c.bench_function("earclip comb 16", |b| b.iter(|| triangulate(&large).unwrap()));
}

criterion_group!(benches, earclip_bench);
criterion_main!(benches);
