// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use garden_bed_paint::{Figure, FigureConfig, Palette, emit_subtree};
use garden_bed_tree::{Bed, BedTree, NodeId, Rotation};

/// A chain of `depth` beds, each inheriting both extents and offset by one unit.
fn gen_chain(depth: usize) -> (BedTree, NodeId, NodeId) {
    let mut tree = BedTree::new();
    let root = tree.insert(None, Bed::sized(1000.0, 1000.0)).unwrap();
    let mut leaf = root;
    for _ in 0..depth {
        leaf = tree.add_child(leaf, Bed::new().at(1.0, 1.0)).unwrap();
    }
    (tree, root, leaf)
}

/// A plot with `rows` rows of `per_row` labeled beds.
fn gen_plot(rows: usize, per_row: usize) -> (BedTree, NodeId) {
    let mut tree = BedTree::new();
    let w = per_row as f64 * 2.0;
    let h = rows as f64 * 2.0;
    let root = tree.insert(None, Bed::sized(w, h)).unwrap();
    for r in 0..rows {
        let row = tree
            .add_child(root, Bed::new().with_height(1.5).at(0.0, r as f64 * 2.0))
            .unwrap();
        tree.add_children(
            row,
            (0..per_row).map(|i| {
                Bed::new()
                    .with_width(1.5)
                    .at(i as f64 * 2.0, 0.0)
                    .with_color(if i % 2 == 0 { "tomatoes" } else { "veg" })
                    .with_label("x")
            }),
        )
        .unwrap();
    }
    (tree, root)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");
    for depth in [8_usize, 64, 512] {
        let (tree, _root, leaf) = gen_chain(depth);
        group.bench_function(format!("effective_size_depth_{depth}"), |b| {
            b.iter(|| black_box(tree.effective_size(black_box(leaf)).unwrap()));
        });
        group.bench_function(format!("absolute_position_depth_{depth}"), |b| {
            b.iter(|| black_box(tree.absolute_position(black_box(leaf)).unwrap()));
        });
    }
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    group.bench_function("mirror_vertically_32x32", |b| {
        b.iter_batched(
            || gen_plot(32, 32),
            |(mut tree, root)| {
                tree.mirror_vertically(root).unwrap();
                black_box(tree);
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("rotate_quarter_32x32", |b| {
        b.iter_batched(
            || gen_plot(32, 32),
            |(mut tree, root)| {
                tree.rotate(root, Rotation::Quarter).unwrap();
                black_box(tree);
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("deep_copy_32x32", |b| {
        let (tree, root) = gen_plot(32, 32);
        b.iter(|| black_box(tree.deep_copy(root).unwrap()));
    });
    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let palette = Palette::default();
    for (rows, per_row) in [(8_usize, 8_usize), (32, 32)] {
        let (tree, root) = gen_plot(rows, per_row);
        group.bench_function(format!("emit_subtree_{rows}x{per_row}"), |b| {
            b.iter(|| black_box(emit_subtree(&tree, root, &palette).unwrap()));
        });
        group.bench_function(format!("render_figure_{rows}x{per_row}"), |b| {
            b.iter(|| {
                black_box(
                    Figure::render(&tree, root, &palette, &FigureConfig::default()).unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_transforms, bench_emit);
criterion_main!(benches);
