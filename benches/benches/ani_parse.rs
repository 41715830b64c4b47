//! Benchmark suite for container parsing and CSS generation
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use anicursor_benches::{generate_cursor_data, generate_icon, sizes};
use anicursor_loader::{FrameResizer, IconResizer, RenderSize};
use anicursor_types::{
	ani::{ChunkIndex, File},
	css,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SHAPES: [(&str, (u32, u32)); 3] =
	[("static", sizes::STATIC), ("typical", sizes::TYPICAL), ("large", sizes::LARGE)];

/// Benchmark chunk indexing alone
fn bench_chunk_index(c: &mut Criterion) {
	let mut group = c.benchmark_group("ani_chunk_index");

	for (name, (images, size)) in SHAPES {
		let data = generate_cursor_data(images, size);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("build", name), &data, |b, data| {
			b.iter(|| black_box(ChunkIndex::build(black_box(data))));
		});
	}

	group.finish();
}

/// Benchmark full parse plus timeline resolution
fn bench_parse_and_resolve(c: &mut Criterion) {
	let mut group = c.benchmark_group("ani_parse");

	for (name, (images, size)) in SHAPES {
		let data = generate_cursor_data(images, size);
		group.bench_with_input(BenchmarkId::new("timeline", name), &data, |b, data| {
			b.iter(|| {
				let result = File::from_bytes(black_box(data)).and_then(|ani| ani.timeline());
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark keyframe text generation with data-URI sized urls
fn bench_render_keyframes(c: &mut Criterion) {
	let mut group = c.benchmark_group("css_keyframes");

	for (name, (images, size)) in SHAPES {
		let Some(timeline) = File::from_vec(generate_cursor_data(images, size)).ok().and_then(|f| f.timeline().ok())
		else {
			eprintln!("Warning: Could not build timeline for: {name}");
			continue;
		};
		let url = format!("data:image/png;base64,{}", "A".repeat(2048));
		let scope = css::style_scope_id("/cursors/bench.ani");
		let animation = css::animation_name(&scope);

		group.throughput(Throughput::Elements(timeline.len() as u64));
		group.bench_with_input(BenchmarkId::new("render", name), &timeline, |b, timeline| {
			b.iter(|| black_box(css::render_keyframes(&animation, timeline, "auto", |_| &url)));
		});
	}

	group.finish();
}

/// Benchmark decoding and resizing one frame image
fn bench_resize_frame(c: &mut Criterion) {
	let mut group = c.benchmark_group("frame_resize");
	let resizer = IconResizer::default();

	for size in [32u32, 64, 128] {
		let icon = generate_icon(size);
		group.bench_with_input(BenchmarkId::new("to_32", size), &icon, |b, icon| {
			b.iter(|| {
				black_box(resizer.resize(
					0,
					black_box(icon),
					RenderSize {
						width: 32,
						height: 32,
					},
				))
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_chunk_index, bench_parse_and_resolve, bench_render_keyframes, bench_resize_frame);

criterion_main!(benches);
