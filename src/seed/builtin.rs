//! Built-in expense dataset
//!
//! Daily spend for a rooftop construction job, used when no seed file is
//! configured.

use crate::models::{ExpenseDay, ExpenseItem};

/// The default set of expense days
pub fn builtin_days() -> Vec<ExpenseDay> {
    vec![
        ExpenseDay::new(
            "Day 1 - Site preparation",
            vec![
                ExpenseItem::new("Cement (20 bags)", 11_000),
                ExpenseItem::new("Sand (2 trucks)", 6_500),
                ExpenseItem::new("Labour (6 workers)", 4_800),
                ExpenseItem::new("Transport", 1_200),
            ],
        )
        .paid(true)
        .receipt("day1-cement-sand.pdf"),
        ExpenseDay::new(
            "Day 2 - Column casting",
            vec![
                ExpenseItem::new("Steel rods (500 kg)", 42_500),
                ExpenseItem::new("Binding wire", 900),
                ExpenseItem::new("Stone chips", 8_400),
                ExpenseItem::new("Labour (8 workers)", 6_400),
            ],
        )
        .paid(true),
        ExpenseDay::new(
            "Day 3 - Brick work",
            vec![
                ExpenseItem::new("Bricks (3000 pcs)", 36_000),
                ExpenseItem::new("Cement (10 bags)", 5_500),
                ExpenseItem::new("Mason and helpers", 5_200),
            ],
        ),
        ExpenseDay::new(
            "Day 4 - Roof shuttering",
            vec![
                ExpenseItem::new("Shuttering rent", 7_500),
                ExpenseItem::new("Bamboo and planks", 3_800),
                ExpenseItem::new("Nails and tools", 650),
                ExpenseItem::new("Labour (10 workers)", 8_000),
                ExpenseItem::new("Tea and snacks", 450),
            ],
        ),
        ExpenseDay::new(
            "Day 5 - Roof casting",
            vec![
                ExpenseItem::new("Ready-mix concrete", 58_000),
                ExpenseItem::new("Mixer machine rent", 4_500),
                ExpenseItem::new("Labour (14 workers)", 11_200),
            ],
        ),
        ExpenseDay::new(
            "Day 6 - Curing and cleanup",
            vec![
                ExpenseItem::new("Water supply", 1_500),
                ExpenseItem::new("Debris removal", 2_200),
            ],
        ),
    ]
}
