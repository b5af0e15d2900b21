//! Chart diagram geometry tables.
//!
//! Renderers place glyphs, not geometry, so all they need from us is where
//! each slot sits. Two fixed layouts are published: the South Indian
//! square, where cells are pinned to rashis, and the North Indian diamond,
//! where cells are pinned to bhavas.

use crate::bhava::Bhava;
use crate::rashi::Rashi;

/// South Indian chakra: `(row, column)` cell per rashi, indexed by
/// [`crate::rashi::Rashi::index`].
///
/// The frame is a 4x4 grid whose twelve border cells run clockwise from
/// Mesha at the top row's second cell; the four interior cells stay empty.
pub const SOUTH_CHAKRA_CELLS: [(u8, u8); 12] = [
    (0, 1), // Mesha
    (0, 2), // Vrishabha
    (0, 3), // Mithuna
    (1, 3), // Karka
    (2, 3), // Simha
    (3, 3), // Kanya
    (3, 2), // Tula
    (3, 1), // Vrischika
    (3, 0), // Dhanu
    (2, 0), // Makara
    (1, 0), // Kumbha
    (0, 0), // Meena
];

/// North Indian chakra: `(x, y)` label anchor per bhava, indexed by
/// [`crate::bhava::Bhava::index`].
///
/// Anchors are half-unit coordinates in an 8x8 frame (x right, y down).
/// Bhava 1 is the top-centre diamond and the count proceeds
/// anticlockwise; the four kendra bhavas sit in the central diamonds.
pub const NORTH_CHAKRA_SLOTS: [(u8, u8); 12] = [
    (4, 2), // 1: top diamond
    (2, 1), // 2: top-left triangle
    (1, 2), // 3: left-top triangle
    (2, 4), // 4: left diamond
    (1, 6), // 5: left-bottom triangle
    (2, 7), // 6: bottom-left triangle
    (4, 6), // 7: bottom diamond
    (6, 7), // 8: bottom-right triangle
    (7, 6), // 9: right-bottom triangle
    (6, 4), // 10: right diamond
    (7, 2), // 11: right-top triangle
    (6, 1), // 12: top-right triangle
];

/// Cell of a rashi in the South Indian layout.
pub const fn south_cell(rashi: Rashi) -> (u8, u8) {
    SOUTH_CHAKRA_CELLS[rashi.index() as usize]
}

/// Label anchor of a bhava in the North Indian layout.
pub const fn north_slot(bhava: Bhava) -> (u8, u8) {
    NORTH_CHAKRA_SLOTS[bhava.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bhava::ALL_BHAVAS;

    #[test]
    fn south_cells_distinct_and_on_border() {
        for (i, &(row, col)) in SOUTH_CHAKRA_CELLS.iter().enumerate() {
            assert!(row < 4 && col < 4, "cell {i} out of frame");
            assert!(
                row == 0 || row == 3 || col == 0 || col == 3,
                "cell {i} is interior"
            );
            for &other in &SOUTH_CHAKRA_CELLS[..i] {
                assert_ne!((row, col), other, "cell {i} duplicated");
            }
        }
    }

    #[test]
    fn south_cells_run_clockwise() {
        // Adjacent rashis occupy adjacent border cells.
        for i in 0..12 {
            let (r1, c1) = SOUTH_CHAKRA_CELLS[i];
            let (r2, c2) = SOUTH_CHAKRA_CELLS[(i + 1) % 12];
            let step = r1.abs_diff(r2) + c1.abs_diff(c2);
            assert_eq!(step, 1, "rashi {i} to {} is not one cell", (i + 1) % 12);
        }
    }

    #[test]
    fn north_slots_distinct_and_in_frame() {
        for (i, &(x, y)) in NORTH_CHAKRA_SLOTS.iter().enumerate() {
            assert!(x <= 8 && y <= 8, "slot {i} out of frame");
            for &other in &NORTH_CHAKRA_SLOTS[..i] {
                assert_ne!((x, y), other, "slot {i} duplicated");
            }
        }
    }

    #[test]
    fn accessors_index_the_tables() {
        assert_eq!(south_cell(Rashi::Meena), (0, 0));
        assert_eq!(south_cell(Rashi::Mesha), (0, 1));
        assert_eq!(north_slot(Bhava::Tanu), (4, 2));
        assert_eq!(north_slot(Bhava::Yuvati), (4, 6));
    }

    #[test]
    fn north_kendras_form_central_diamonds() {
        // Bhavas 1, 4, 7, 10 anchor on the frame's midlines.
        for bhava in ALL_BHAVAS {
            let (x, y) = NORTH_CHAKRA_SLOTS[bhava.index() as usize];
            if bhava.is_kendra() {
                assert!(x == 4 || y == 4, "kendra {} off the midlines", bhava.number());
            } else {
                assert!(x != 4 && y != 4, "cadent {} on a midline", bhava.number());
            }
        }
    }
}
