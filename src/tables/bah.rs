//! Basic Allowance for Housing table
//!
//! 2025 monthly BAH by locality and grade bucket, with and without
//! dependents. The table buckets E1 through E4 together and stops at O6;
//! `GradeBucket::from_grade` collapses grades accordingly, treating anything
//! above the tabulated officer ceiling as the ceiling bucket.

use std::collections::HashMap;
use std::fmt;

use crate::models::{DependencyStatus, PayGrade};

/// A grade bucket as keyed by the BAH table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeBucket {
    /// E1 through E4 share one housing rate
    E1ToE4,
    E5,
    E6,
    E7,
    E8,
    E9,
    W1,
    W2,
    W3,
    W4,
    W5,
    O1,
    O2,
    O3,
    O4,
    O5,
    O6,
}

impl GradeBucket {
    /// All buckets in table order
    pub const ALL: [GradeBucket; 17] = [
        GradeBucket::E1ToE4,
        GradeBucket::E5,
        GradeBucket::E6,
        GradeBucket::E7,
        GradeBucket::E8,
        GradeBucket::E9,
        GradeBucket::W1,
        GradeBucket::W2,
        GradeBucket::W3,
        GradeBucket::W4,
        GradeBucket::W5,
        GradeBucket::O1,
        GradeBucket::O2,
        GradeBucket::O3,
        GradeBucket::O4,
        GradeBucket::O5,
        GradeBucket::O6,
    ];

    /// Collapse a pay grade into its BAH bucket
    ///
    /// E1-E4 share a bucket; every other canonical grade keys its own row.
    /// Grades above the tabulated officer ceiling fall back to O6.
    pub fn from_grade(grade: PayGrade) -> Self {
        match grade {
            PayGrade::E1 | PayGrade::E2 | PayGrade::E3 | PayGrade::E4 => GradeBucket::E1ToE4,
            PayGrade::E5 => GradeBucket::E5,
            PayGrade::E6 => GradeBucket::E6,
            PayGrade::E7 => GradeBucket::E7,
            PayGrade::E8 => GradeBucket::E8,
            PayGrade::E9 => GradeBucket::E9,
            PayGrade::W1 => GradeBucket::W1,
            PayGrade::W2 => GradeBucket::W2,
            PayGrade::W3 => GradeBucket::W3,
            PayGrade::W4 => GradeBucket::W4,
            PayGrade::W5 => GradeBucket::W5,
            PayGrade::O1 => GradeBucket::O1,
            PayGrade::O2 => GradeBucket::O2,
            PayGrade::O3 => GradeBucket::O3,
            PayGrade::O4 => GradeBucket::O4,
            PayGrade::O5 => GradeBucket::O5,
            PayGrade::O6 => GradeBucket::O6,
        }
    }

    /// Table label for the bucket
    pub fn label(&self) -> &'static str {
        match self {
            GradeBucket::E1ToE4 => "E1\u{2013}E4",
            GradeBucket::E5 => "E5",
            GradeBucket::E6 => "E6",
            GradeBucket::E7 => "E7",
            GradeBucket::E8 => "E8",
            GradeBucket::E9 => "E9",
            GradeBucket::W1 => "W1",
            GradeBucket::W2 => "W2",
            GradeBucket::W3 => "W3",
            GradeBucket::W4 => "W4",
            GradeBucket::W5 => "W5",
            GradeBucket::O1 => "O1",
            GradeBucket::O2 => "O2",
            GradeBucket::O3 => "O3",
            GradeBucket::O4 => "O4",
            GradeBucket::O5 => "O5",
            GradeBucket::O6 => "O6",
        }
    }
}

impl fmt::Display for GradeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Monthly BAH rates for one (locality, bucket) cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BahRate {
    pub with_dependents: f64,
    pub without_dependents: f64,
}

impl BahRate {
    /// The rate for a dependency status
    pub fn for_status(&self, status: DependencyStatus) -> f64 {
        match status {
            DependencyStatus::With => self.with_dependents,
            DependencyStatus::Without => self.without_dependents,
        }
    }
}

/// An injectable BAH table: locality -> bucket -> rates
///
/// Localities keep their source order so listings are stable.
#[derive(Debug, Clone)]
pub struct BahTable {
    localities: Vec<(String, HashMap<GradeBucket, BahRate>)>,
}

impl BahTable {
    /// Build a table from (locality, [(bucket, with, without)]) rows
    pub fn from_rows(rows: &[(&str, &[(GradeBucket, f64, f64)])]) -> Self {
        let localities = rows
            .iter()
            .map(|(name, cells)| {
                let rates = cells
                    .iter()
                    .map(|(bucket, with, without)| {
                        (
                            *bucket,
                            BahRate {
                                with_dependents: *with,
                                without_dependents: *without,
                            },
                        )
                    })
                    .collect();
                (name.to_string(), rates)
            })
            .collect();
        Self { localities }
    }

    /// The shipped 2025 table
    pub fn year_2025() -> Self {
        Self::from_rows(BAH_2025)
    }

    /// An empty table (no localities)
    pub fn empty() -> Self {
        Self {
            localities: Vec::new(),
        }
    }

    /// Look up the rates for a locality and bucket
    pub fn rate(&self, locality: &str, bucket: GradeBucket) -> Option<BahRate> {
        self.localities
            .iter()
            .find(|(name, _)| name == locality)
            .and_then(|(_, rates)| rates.get(&bucket))
            .copied()
    }

    /// Locality names in table order
    pub fn localities(&self) -> impl Iterator<Item = &str> {
        self.localities.iter().map(|(name, _)| name.as_str())
    }

    /// Number of localities
    pub fn len(&self) -> usize {
        self.localities.len()
    }

    /// Whether the table has no localities
    pub fn is_empty(&self) -> bool {
        self.localities.is_empty()
    }
}

impl Default for BahTable {
    fn default() -> Self {
        Self::year_2025()
    }
}

/// 2025 monthly BAH data: (with dependents, without dependents) per bucket
const BAH_2025: &[(&str, &[(GradeBucket, f64, f64)])] = &[
    (
        "San Diego, CA",
        &[
            (GradeBucket::E1ToE4, 3579.0, 2684.0),
            (GradeBucket::E5, 3882.0, 2964.0),
            (GradeBucket::E6, 4320.0, 3240.0),
            (GradeBucket::E7, 4344.0, 3534.0),
            (GradeBucket::E8, 4353.0, 3972.0),
            (GradeBucket::E9, 4491.0, 4101.0),
            (GradeBucket::W1, 4413.0, 3555.0),
            (GradeBucket::W2, 4458.0, 4068.0),
            (GradeBucket::W3, 4518.0, 4203.0),
            (GradeBucket::W4, 4716.0, 4398.0),
            (GradeBucket::W5, 4959.0, 4449.0),
            (GradeBucket::O1, 3939.0, 3153.0),
            (GradeBucket::O2, 4317.0, 3759.0),
            (GradeBucket::O3, 4359.0, 4161.0),
            (GradeBucket::O4, 4869.0, 4323.0),
            (GradeBucket::O5, 5244.0, 4335.0),
            (GradeBucket::O6, 5289.0, 4338.0),
        ],
    ),
    (
        "Norfolk/Virginia Beach, VA",
        &[
            (GradeBucket::E1ToE4, 2154.0, 1674.0),
            (GradeBucket::E5, 2325.0, 1869.0),
            (GradeBucket::E6, 2469.0, 1995.0),
            (GradeBucket::E7, 2505.0, 2157.0),
            (GradeBucket::E8, 2544.0, 2361.0),
            (GradeBucket::E9, 2673.0, 2391.0),
            (GradeBucket::W1, 2484.0, 2103.0),
            (GradeBucket::W2, 2523.0, 2358.0),
            (GradeBucket::W3, 2577.0, 2397.0),
            (GradeBucket::W4, 2712.0, 2469.0),
            (GradeBucket::W5, 2877.0, 2514.0),
            (GradeBucket::O1, 2352.0, 1977.0),
            (GradeBucket::O2, 2466.0, 2271.0),
            (GradeBucket::O3, 2574.0, 2412.0),
            (GradeBucket::O4, 2934.0, 2499.0),
            (GradeBucket::O5, 3192.0, 2517.0),
            (GradeBucket::O6, 3219.0, 2556.0),
        ],
    ),
    (
        "Washington, D.C.",
        &[
            (GradeBucket::E1ToE4, 2922.0, 2283.0),
            (GradeBucket::E5, 2952.0, 2679.0),
            (GradeBucket::E6, 3459.0, 2892.0),
            (GradeBucket::E7, 3579.0, 2931.0),
            (GradeBucket::E8, 3702.0, 3057.0),
            (GradeBucket::E9, 3876.0, 3204.0),
            (GradeBucket::W1, 3480.0, 2928.0),
            (GradeBucket::W2, 3630.0, 3054.0),
            (GradeBucket::W3, 3786.0, 3222.0),
            (GradeBucket::W4, 3915.0, 3483.0),
            (GradeBucket::W5, 4068.0, 3606.0),
            (GradeBucket::O1, 2763.0, 2349.0),
            (GradeBucket::O2, 3081.0, 2655.0),
            (GradeBucket::O3, 3447.0, 2949.0),
            (GradeBucket::O4, 3678.0, 3222.0),
            (GradeBucket::O5, 3834.0, 3300.0),
            (GradeBucket::O6, 3870.0, 3435.0),
        ],
    ),
    (
        "Jacksonville, FL",
        &[
            (GradeBucket::E1ToE4, 2100.0, 1671.0),
            (GradeBucket::E5, 2226.0, 1860.0),
            (GradeBucket::E6, 2295.0, 1977.0),
            (GradeBucket::E7, 2343.0, 2100.0),
            (GradeBucket::E8, 2397.0, 2247.0),
            (GradeBucket::E9, 2481.0, 2253.0),
            (GradeBucket::W1, 2310.0, 2067.0),
            (GradeBucket::W2, 2364.0, 2244.0),
            (GradeBucket::W3, 2436.0, 2259.0),
            (GradeBucket::W4, 2502.0, 2295.0),
            (GradeBucket::W5, 2586.0, 2355.0),
            (GradeBucket::O1, 2244.0, 1968.0),
            (GradeBucket::O2, 2292.0, 2187.0),
            (GradeBucket::O3, 2433.0, 2265.0),
            (GradeBucket::O4, 2613.0, 2337.0),
            (GradeBucket::O5, 2736.0, 2364.0),
            (GradeBucket::O6, 2760.0, 2415.0),
        ],
    ),
    (
        "Pensacola, FL",
        &[
            (GradeBucket::E1ToE4, 2100.0, 1671.0),
            (GradeBucket::E5, 2226.0, 1860.0),
            (GradeBucket::E6, 2295.0, 1977.0),
            (GradeBucket::E7, 2343.0, 2100.0),
            (GradeBucket::E8, 2397.0, 2247.0),
            (GradeBucket::E9, 2481.0, 2253.0),
            (GradeBucket::W1, 646.0, 537.0),
            (GradeBucket::W2, 687.0, 583.0),
            (GradeBucket::W3, 728.0, 601.0),
            (GradeBucket::W4, 795.0, 685.0),
            (GradeBucket::W5, 859.0, 710.0),
            (GradeBucket::O1, 624.0, 520.0),
            (GradeBucket::O2, 687.0, 583.0),
            (GradeBucket::O3, 728.0, 601.0),
            (GradeBucket::O4, 795.0, 685.0),
            (GradeBucket::O5, 859.0, 710.0),
            (GradeBucket::O6, 859.0, 710.0),
        ],
    ),
    (
        "Charleston, SC",
        &[
            (GradeBucket::E1ToE4, 2244.0, 1905.0),
            (GradeBucket::E5, 2406.0, 2148.0),
            (GradeBucket::E6, 2610.0, 2286.0),
            (GradeBucket::E7, 2643.0, 2367.0),
            (GradeBucket::E8, 2679.0, 2526.0),
            (GradeBucket::E9, 2757.0, 2634.0),
            (GradeBucket::W1, 2847.0, 2352.0),
            (GradeBucket::W2, 2892.0, 2523.0),
            (GradeBucket::W3, 2955.0, 2649.0),
            (GradeBucket::W4, 3072.0, 2835.0),
            (GradeBucket::W5, 3219.0, 2883.0),
            (GradeBucket::O1, 2499.0, 2283.0),
            (GradeBucket::O2, 2826.0, 2424.0),
            (GradeBucket::O3, 2952.0, 2688.0),
            (GradeBucket::O4, 3267.0, 2868.0),
            (GradeBucket::O5, 3492.0, 2892.0),
            (GradeBucket::O6, 3522.0, 2934.0),
        ],
    ),
    (
        "Everett/Seattle, WA",
        &[
            (GradeBucket::E1ToE4, 2532.0, 1935.0),
            (GradeBucket::E5, 2712.0, 2202.0),
            (GradeBucket::E6, 3084.0, 2367.0),
            (GradeBucket::E7, 3219.0, 2538.0),
            (GradeBucket::E8, 3360.0, 2790.0),
            (GradeBucket::E9, 3513.0, 2895.0),
            (GradeBucket::W1, 3105.0, 2481.0),
            (GradeBucket::W2, 3276.0, 2787.0),
            (GradeBucket::W3, 3453.0, 2910.0),
            (GradeBucket::W4, 3537.0, 3111.0),
            (GradeBucket::W5, 3645.0, 3249.0),
            (GradeBucket::O1, 2763.0, 2349.0),
            (GradeBucket::O2, 3081.0, 2655.0),
            (GradeBucket::O3, 3447.0, 2949.0),
            (GradeBucket::O4, 3678.0, 3222.0),
            (GradeBucket::O5, 3834.0, 3300.0),
            (GradeBucket::O6, 3870.0, 3435.0),
        ],
    ),
    (
        "Great Lakes, IL",
        &[
            (GradeBucket::E1ToE4, 2082.0, 1563.0),
            (GradeBucket::E5, 2274.0, 1770.0),
            (GradeBucket::E6, 2628.0, 1971.0),
            (GradeBucket::E7, 2736.0, 2088.0),
            (GradeBucket::E8, 2844.0, 2349.0),
            (GradeBucket::E9, 3018.0, 2448.0),
            (GradeBucket::W1, 2649.0, 2028.0),
            (GradeBucket::W2, 2781.0, 2346.0),
            (GradeBucket::W3, 2919.0, 2463.0),
            (GradeBucket::W4, 3057.0, 2649.0),
            (GradeBucket::W5, 3228.0, 2760.0),
            (GradeBucket::O1, 2322.0, 1890.0),
            (GradeBucket::O2, 2625.0, 2214.0),
            (GradeBucket::O3, 2916.0, 2499.0),
            (GradeBucket::O4, 3285.0, 2736.0),
            (GradeBucket::O5, 3543.0, 2796.0),
            (GradeBucket::O6, 3576.0, 2901.0),
        ],
    ),
    (
        "Monterey, CA",
        &[
            (GradeBucket::E1ToE4, 3579.0, 2684.0),
            (GradeBucket::E5, 3882.0, 2964.0),
            (GradeBucket::E6, 4320.0, 3240.0),
            (GradeBucket::E7, 4344.0, 3534.0),
            (GradeBucket::E8, 4353.0, 3972.0),
            (GradeBucket::E9, 4491.0, 4101.0),
            (GradeBucket::W1, 4413.0, 3555.0),
            (GradeBucket::W2, 4458.0, 4068.0),
            (GradeBucket::W3, 4518.0, 4203.0),
            (GradeBucket::W4, 4716.0, 4398.0),
            (GradeBucket::W5, 4959.0, 4449.0),
            (GradeBucket::O1, 3939.0, 3153.0),
            (GradeBucket::O2, 4317.0, 3759.0),
            (GradeBucket::O3, 4359.0, 4161.0),
            (GradeBucket::O4, 4869.0, 4323.0),
            (GradeBucket::O5, 5244.0, 4335.0),
            (GradeBucket::O6, 5289.0, 4338.0),
        ],
    ),
    (
        "Point Loma, CA",
        &[
            (GradeBucket::E1ToE4, 3579.0, 2684.0),
            (GradeBucket::E5, 3882.0, 2964.0),
            (GradeBucket::E6, 4320.0, 3240.0),
            (GradeBucket::E7, 4344.0, 3534.0),
            (GradeBucket::E8, 4353.0, 3972.0),
            (GradeBucket::E9, 4491.0, 4101.0),
            (GradeBucket::W1, 4341.0, 3396.0),
            (GradeBucket::W2, 4350.0, 3969.0),
            (GradeBucket::W3, 4362.0, 4119.0),
            (GradeBucket::W4, 4545.0, 4320.0),
            (GradeBucket::W5, 4785.0, 4332.0),
            (GradeBucket::O1, 3939.0, 3153.0),
            (GradeBucket::O2, 4317.0, 3759.0),
            (GradeBucket::O3, 4359.0, 4161.0),
            (GradeBucket::O4, 4869.0, 4323.0),
            (GradeBucket::O5, 5244.0, 4335.0),
            (GradeBucket::O6, 5289.0, 4338.0),
        ],
    ),
];
