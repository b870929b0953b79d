// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Garden plan.
//!
//! Build a plot with a path and two rows of beds, copy the first row to make
//! the second, mirror it to the far side of the path, and print the plan as SVG.
//!
//! Run:
//! - `cargo run -p garden_demos --example garden_plan > plan.svg`
//! - `RUST_LOG=debug cargo run -p garden_demos --example garden_plan` to watch the tree being built

use garden_bed_paint::{Figure, FigureConfig, Palette};
use garden_bed_tree::{Bed, BedTree};
use garden_demos::{SvgCanvas, init_logging};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut tree = BedTree::new();
    let plot = tree.insert(None, Bed::sized(12.0, 8.0).with_color("bed"))?;

    // A path runs across the middle; rows span the full plot width.
    tree.add_child(plot, Bed::new().with_height(1.0).at(0.0, 3.5).with_color("path"))?;
    let north = tree.add_child(plot, Bed::new().with_height(3.0).at(0.0, 0.25))?;
    tree.add_children(
        north,
        [
            Bed::new().with_width(3.0).at(0.5, 0.0).with_color("tomatoes").with_label("Tomatoes"),
            Bed::new().with_width(3.0).at(4.5, 0.0).with_color("veg").with_label("Beans"),
            Bed::new().with_width(3.0).at(8.5, 0.0).with_color("#9acd32").with_label("Herbs"),
        ],
    )?;

    // Copy the row, put it back under the plot, and flip it to the other side
    // of the path. Its beds end up in reverse order across the plot.
    let copy = tree.deep_copy(north)?;
    let south = tree.graft(plot, copy)?[0];
    tree.mirror_vertically(south)?;
    tree.mirror_horizontally(south)?;
    info!(beds = tree.len(), "plan built");

    let figure = Figure::render(&tree, south, &Palette::default(), &FigureConfig::default())?;
    let mut canvas = SvgCanvas::default();
    figure.replay(&mut canvas)?;
    print!("{}", canvas.as_str());
    Ok(())
}
