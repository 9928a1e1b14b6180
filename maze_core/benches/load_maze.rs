use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_core::{load_maze_info, GridScale, RawSegment, DEFAULT_BLOCK_SIZE, DEFAULT_OFFSET};

fn px(index: i32) -> i32 {
    DEFAULT_OFFSET + index * DEFAULT_BLOCK_SIZE
}

/// Comb-shaped maze: a wall between every pair of columns, open at alternating ends
fn synthetic_segments(width: i32, height: i32) -> Vec<RawSegment> {
    let mut out = Vec::with_capacity(width as usize * 2 + 4);

    out.push(RawSegment::new(px(0), px(0), px(0), px(height)));
    out.push(RawSegment::new(px(width), px(0), px(width), px(height)));
    out.push(RawSegment::new(px(1), px(0), px(width), px(0)));
    out.push(RawSegment::new(px(0), px(height), px(width - 1), px(height)));

    for x in 1..width {
        let (top, bottom) = if x % 2 == 0 { (1, height) } else { (0, height - 1) };
        out.push(RawSegment::new(px(x), px(top), px(x), px(bottom)));
    }

    for y in (2..height).step_by(7) {
        out.push(RawSegment::new(px(0), px(y), px(width / 3), px(y)));
    }

    out
}

fn bench_load_maze(c: &mut Criterion) {
    let (width, height) = (120, 90);
    let segments = synthetic_segments(width, height);
    let scale = GridScale::default();

    c.bench_function("maze_core_load_120x90", |b| {
        b.iter(|| {
            let info = load_maze_info(black_box(segments.iter().copied()), width, height, &scale)
                .expect("synthetic maze is well formed");
            black_box(info.blocked_neighbors().pair_count());
        });
    });
}

criterion_group!(benches, bench_load_maze);
criterion_main!(benches);
