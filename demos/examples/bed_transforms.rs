// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bed transforms.
//!
//! Rotate a plot by quarter turns and show where a corner bed ends up, then
//! mirror it and mirror it back.
//!
//! Run:
//! - `cargo run -p garden_demos --example bed_transforms`

use garden_bed_tree::{Bed, BedTree, Rotation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    garden_demos::init_logging();

    let mut tree = BedTree::new();
    let plot = tree.insert(None, Bed::sized(20.0, 10.0))?;
    let corner = tree.add_child(plot, Bed::sized(4.0, 3.0).at(1.0, 2.0).with_label("corner"))?;
    // A strip that inherits its height, so it always spans the corner bed.
    let strip = tree.add_child(corner, Bed::new().with_width(1.0))?;

    println!("start: corner {:?}", tree.absolute_bounds(corner)?);
    for turn in 1..=4 {
        tree.rotate(plot, Rotation::Quarter)?;
        println!(
            "after {} deg: plot {:?}, corner {:?}, strip {:?}",
            turn * 90,
            tree.effective_size(plot)?,
            tree.absolute_bounds(corner)?,
            tree.absolute_bounds(strip)?
        );
    }

    tree.mirror_vertically(corner)?;
    println!("mirrored: corner {:?}", tree.absolute_bounds(corner)?);
    tree.mirror_vertically(corner)?;
    println!("restored: corner {:?}", tree.absolute_bounds(corner)?);

    // Odd angles are rejected up front.
    if let Err(e) = tree.rotate_degrees(plot, 45.0) {
        println!("rotate 45: {e}");
    }
    Ok(())
}
