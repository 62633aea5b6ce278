// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{ternary::Ternary, truth_table::TruthTable};
use proptest::prelude::*;

impl Arbitrary for Ternary {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Ternary::False),
            Just(Ternary::True),
            Just(Ternary::DontCare),
        ]
        .boxed()
    }
}

impl Arbitrary for TruthTable {
    /// `(inputs, outputs)`, defaulting to 3 inputs and 1 output.
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (inputs, outputs) = params.unwrap_or((3, 1));
        // Each input assignment gets at most one fully defined row, so rows never overlap.
        // Missing rows are left for the grid to complete.
        let row_strategy = prop::option::of(prop::collection::vec(any::<Ternary>(), outputs));
        prop::collection::vec(row_strategy, 1 << inputs)
            .prop_map(move |rows| {
                let mut data = Vec::new();
                for (assignment, row) in rows.into_iter().enumerate() {
                    if let Some(row_outputs) = row {
                        data.extend(
                            (0..inputs).map(|bit| Ternary::from((assignment >> bit) & 1 == 1)),
                        );
                        data.extend(row_outputs);
                    }
                }
                TruthTable::new(data, inputs, outputs).expect("rows are generated whole")
            })
            .boxed()
    }
}
