//! Official test-to-CLB equivalency grids.
//!
//! Band tables are ordered from the highest band to the lowest, matching the dropdown order.
//! Numeric ladders are checked top-down; the first threshold the score reaches wins.

/// A dropdown band token and the CLB level it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub token: &'static str,
    pub clb: u8,
}

const fn band(token: &'static str, clb: u8) -> ScoreBand {
    ScoreBand { token, clb }
}

/// Descending native-score thresholds for one (test, skill) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLadder {
    pub steps: &'static [(f32, u8)],
    /// Scores below the last step fall back to `floor(score / divisor)`, never above the last
    /// step's level; `None` means CLB 0.
    pub below_divisor: Option<f32>,
}

// CELPIP levels map one-to-one to CLB, topping out at CLB 10.
pub(crate) const CELPIP_BANDS: &[ScoreBand] = &[
    band("12", 10),
    band("11", 10),
    band("10", 10),
    band("9", 9),
    band("8", 8),
    band("7", 7),
    band("6", 6),
    band("5", 5),
    band("4", 4),
    band("3", 3),
    band("2", 2),
    band("1", 1),
    band("M", 0),
];

pub(crate) const IELTS_BANDS: &[ScoreBand] = &[
    band("7.5-9.0", 10),
    band("7.0", 9),
    band("6.5", 8),
    band("6.0", 7),
    band("5.5", 6),
    band("5.0", 5),
    band("4.0-4.5", 4),
    band("0-3.5", 0),
];

pub(crate) const PTE_CORE_BANDS: &[ScoreBand] = &[
    band("89-90", 10),
    band("84-88", 9),
    band("79-83", 8),
    band("73-78", 7),
    band("64-72", 6),
    band("59-63", 5),
    band("51-58", 4),
    band("0-50", 0),
];

pub(crate) const TEF_SPEAKING_WRITING_READING_BANDS: &[ScoreBand] = &[
    band("393-450", 10),
    band("371-392", 9),
    band("349-370", 8),
    band("310-348", 7),
    band("271-309", 6),
    band("226-270", 5),
    band("181-225", 4),
    band("0-180", 0),
];

pub(crate) const TEF_LISTENING_BANDS: &[ScoreBand] = &[
    band("316-360", 10),
    band("298-315", 9),
    band("280-297", 8),
    band("249-279", 7),
    band("217-248", 6),
    band("181-216", 5),
    band("145-180", 4),
    band("0-144", 0),
];

pub(crate) const TCF_SPEAKING_WRITING_BANDS: &[ScoreBand] = &[
    band("16-20", 10),
    band("14-15", 9),
    band("12-13", 8),
    band("10-11", 7),
    band("7-9", 6),
    band("6-4", 5),
    band("0-3", 0),
];

/// Alternate spellings accepted on input but never offered in the dropdown.
pub(crate) const TCF_SPEAKING_WRITING_ALIASES: &[ScoreBand] = &[band("4-6", 5)];

pub(crate) const TCF_LISTENING_BANDS: &[ScoreBand] = &[
    band("549-699", 10),
    band("523-548", 9),
    band("503-522", 8),
    band("458-502", 7),
    band("398-457", 6),
    band("369-397", 5),
    band("331-368", 4),
    band("0-330", 0),
];

pub(crate) const TCF_READING_BANDS: &[ScoreBand] = &[
    band("549-699", 10),
    band("524-548", 9),
    band("499-523", 8),
    band("453-498", 7),
    band("406-452", 6),
    band("375-405", 5),
    band("342-374", 4),
    band("0-341", 0),
];

pub(crate) const IELTS_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (9.0, 10),
        (8.0, 9),
        (7.0, 8),
        (6.5, 7),
        (6.0, 6),
        (5.5, 5),
        (5.0, 4),
        (4.0, 3),
    ],
    below_divisor: Some(1.0),
};

pub(crate) const CELPIP_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (10.0, 10),
        (9.0, 9),
        (8.0, 8),
        (7.0, 7),
        (6.0, 6),
        (5.0, 5),
        (4.0, 4),
        (3.0, 3),
        (2.0, 2),
        (1.0, 1),
    ],
    below_divisor: None,
};

pub(crate) const PTE_CORE_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (89.0, 10),
        (84.0, 9),
        (79.0, 8),
        (73.0, 7),
        (64.0, 6),
        (59.0, 5),
        (51.0, 4),
        (41.0, 3),
    ],
    below_divisor: Some(10.0),
};

pub(crate) const TEF_SPEAKING_WRITING_READING_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (393.0, 10),
        (371.0, 9),
        (349.0, 8),
        (310.0, 7),
        (271.0, 6),
        (226.0, 5),
        (181.0, 4),
        (121.0, 3),
    ],
    below_divisor: Some(45.0),
};

pub(crate) const TEF_LISTENING_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (316.0, 10),
        (298.0, 9),
        (280.0, 8),
        (249.0, 7),
        (217.0, 6),
        (181.0, 5),
        (145.0, 4),
    ],
    below_divisor: Some(36.0),
};

pub(crate) const TCF_SPEAKING_WRITING_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (16.0, 10),
        (14.0, 9),
        (12.0, 8),
        (10.0, 7),
        (7.0, 6),
        (4.0, 5),
    ],
    below_divisor: None,
};

pub(crate) const TCF_LISTENING_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (549.0, 10),
        (523.0, 9),
        (503.0, 8),
        (458.0, 7),
        (398.0, 6),
        (369.0, 5),
        (331.0, 4),
    ],
    below_divisor: None,
};

pub(crate) const TCF_READING_LADDER: NumericLadder = NumericLadder {
    steps: &[
        (549.0, 10),
        (524.0, 9),
        (499.0, 8),
        (453.0, 7),
        (406.0, 6),
        (375.0, 5),
        (342.0, 4),
    ],
    below_divisor: None,
};
