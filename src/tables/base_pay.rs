//! Monthly base pay by grade and years-of-service band
//!
//! 2025 figures (monthly) by pay grade and YOS band, from the published
//! basic pay tables for enlisted, warrant officer, and officer grades.
//!
//! Bands used: 0, 2, 3, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22. For grades
//! where the source leaves early-career cells blank (E8/E9, W5), earlier
//! bands carry the first published value so no realistic grade/YOS
//! combination resolves to zero. The table type itself allows sparse rows;
//! resolution walks down to the nearest lower band with a value.

use std::collections::{BTreeMap, HashMap};

use crate::models::PayGrade;

/// The fixed years-of-service band sequence
pub const YOS_BANDS: [u32; 13] = [0, 2, 3, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22];

/// Floor years of service to the nearest band at or below it
///
/// Anything at or above 22 maps to the 22 band.
pub fn yos_band(yos: u32) -> u32 {
    let mut out = 0;
    for band in YOS_BANDS {
        if yos >= band {
            out = band;
        }
    }
    out
}

/// An injectable base pay table: (grade, band) -> monthly amount
///
/// Rows may be sparse; resolution handles missing bands and missing grades.
#[derive(Debug, Clone)]
pub struct BasePayTable {
    rows: HashMap<PayGrade, BTreeMap<u32, f64>>,
}

impl BasePayTable {
    /// Build a table from (grade, [(band, monthly)]) rows
    pub fn from_rows(rows: &[(PayGrade, &[(u32, f64)])]) -> Self {
        let mut map = HashMap::new();
        for (grade, cells) in rows {
            let row: BTreeMap<u32, f64> = cells.iter().copied().collect();
            map.insert(*grade, row);
        }
        Self { rows: map }
    }

    /// The shipped 2025 table
    pub fn year_2025() -> Self {
        Self::from_rows(BASE_PAY_2025)
    }

    /// An empty table (no grades)
    pub fn empty() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Exact cell lookup
    pub fn cell(&self, grade: PayGrade, band: u32) -> Option<f64> {
        self.rows.get(&grade).and_then(|row| row.get(&band)).copied()
    }

    /// All filled bands for a grade, in ascending band order
    pub fn bands_for(&self, grade: PayGrade) -> Option<&BTreeMap<u32, f64>> {
        self.rows.get(&grade)
    }

    /// Whether the table has a row for the grade
    pub fn has_grade(&self, grade: PayGrade) -> bool {
        self.rows.contains_key(&grade)
    }
}

impl Default for BasePayTable {
    fn default() -> Self {
        Self::year_2025()
    }
}

/// 2025 monthly base pay data
///
/// Values are dollars per month, one row per grade, one cell per YOS band.
const BASE_PAY_2025: &[(PayGrade, &[(u32, f64)])] = &[
    // ---------- Enlisted ----------
    // E-1: the published <4-months rate (2144.10) is not modeled; the
    // standard rate applies across all bands.
    (
        PayGrade::E1,
        &[
            (0, 2319.00),
            (2, 2319.00),
            (3, 2319.00),
            (4, 2319.00),
            (6, 2319.00),
            (8, 2319.00),
            (10, 2319.00),
            (12, 2319.00),
            (14, 2319.00),
            (16, 2319.00),
            (18, 2319.00),
            (20, 2319.00),
            (22, 2319.00),
        ],
    ),
    (
        PayGrade::E2,
        &[
            (0, 2599.20),
            (2, 2599.20),
            (3, 2599.20),
            (4, 2599.20),
            (6, 2599.20),
            (8, 2599.20),
            (10, 2599.20),
            (12, 2599.20),
            (14, 2599.20),
            (16, 2599.20),
            (18, 2599.20),
            (20, 2599.20),
            (22, 2599.20),
        ],
    ),
    (
        PayGrade::E3,
        &[
            (0, 2733.00),
            (2, 2904.60),
            (3, 3081.00),
            (4, 3081.00),
            (6, 3081.00),
            (8, 3081.00),
            (10, 3081.00),
            (12, 3081.00),
            (14, 3081.00),
            (16, 3081.00),
            (18, 3081.00),
            (20, 3081.00),
            (22, 3081.00),
        ],
    ),
    (
        PayGrade::E4,
        &[
            (0, 3027.30),
            (2, 3182.10),
            (3, 3354.90),
            (4, 3524.70),
            (6, 3675.60),
            (8, 3675.60),
            (10, 3675.60),
            (12, 3675.60),
            (14, 3675.60),
            (16, 3675.60),
            (18, 3675.60),
            (20, 3675.60),
            (22, 3675.60),
        ],
    ),
    (
        PayGrade::E5,
        &[
            (0, 3220.50),
            (2, 3466.50),
            (3, 3637.50),
            (4, 3802.20),
            (6, 3959.40),
            (8, 4142.40),
            (10, 4234.50),
            (12, 4259.70),
            (14, 4259.70),
            (16, 4259.70),
            (18, 4259.70),
            (20, 4259.70),
            (22, 4259.70),
        ],
    ),
    (
        PayGrade::E6,
        &[
            (0, 3276.60),
            (2, 3606.00),
            (3, 3765.00),
            (4, 3919.80),
            (6, 4080.60),
            (8, 4443.90),
            (10, 4585.20),
            (12, 4858.80),
            (14, 4942.50),
            (16, 5003.40),
            (18, 5074.80),
            (20, 5074.80),
            (22, 5074.80),
        ],
    ),
    (
        PayGrade::E7,
        &[
            (0, 3788.10),
            (2, 4134.30),
            (3, 4293.00),
            (4, 4502.10),
            (6, 4666.50),
            (8, 4947.60),
            (10, 5106.30),
            (12, 5387.10),
            (14, 5621.40),
            (16, 5781.30),
            (18, 5951.10),
            (20, 6017.10),
            (22, 6238.20),
        ],
    ),
    // E-8: early bands backfilled with the first published value
    (
        PayGrade::E8,
        &[
            (0, 5449.50),
            (2, 5449.50),
            (3, 5449.50),
            (4, 5449.50),
            (6, 5449.50),
            (8, 5449.50),
            (10, 5690.70),
            (12, 5839.80),
            (14, 6018.60),
            (16, 6212.10),
            (18, 6561.90),
            (20, 6739.20),
            (22, 7040.70),
        ],
    ),
    // E-9: early bands backfilled with the first published value
    (
        PayGrade::E9,
        &[
            (0, 6657.30),
            (2, 6657.30),
            (3, 6657.30),
            (4, 6657.30),
            (6, 6657.30),
            (8, 6657.30),
            (10, 6657.30),
            (12, 6807.90),
            (14, 6997.80),
            (16, 7221.60),
            (18, 7447.80),
            (20, 7808.40),
            (22, 8114.70),
        ],
    ),
    // ---------- Warrant officers ----------
    (
        PayGrade::W1,
        &[
            (0, 3908.10),
            (2, 4329.30),
            (3, 4442.10),
            (4, 4681.20),
            (6, 4963.50),
            (8, 5379.90),
            (10, 5574.30),
            (12, 5847.00),
            (14, 6114.30),
            (16, 6324.60),
            (18, 6518.40),
            (20, 6753.60),
            (22, 6753.60),
        ],
    ),
    (
        PayGrade::W2,
        &[
            (0, 4452.60),
            (2, 4873.80),
            (3, 5003.10),
            (4, 5092.50),
            (6, 5380.80),
            (8, 5829.60),
            (10, 6052.50),
            (12, 6271.20),
            (14, 6539.10),
            (16, 6748.50),
            (18, 6937.80),
            (20, 7164.60),
            (22, 7313.70),
        ],
    ),
    (
        PayGrade::W3,
        &[
            (0, 5032.20),
            (2, 5241.30),
            (3, 5457.00),
            (4, 5526.90),
            (6, 5752.20),
            (8, 6195.60),
            (10, 6657.60),
            (12, 6875.10),
            (14, 7126.80),
            (16, 7385.40),
            (18, 7851.90),
            (20, 8166.30),
            (22, 8354.40),
        ],
    ),
    (
        PayGrade::W4,
        &[
            (0, 5510.40),
            (2, 5926.80),
            (3, 6096.90),
            (4, 6264.30),
            (6, 6552.90),
            (8, 6838.20),
            (10, 7127.10),
            (12, 7560.90),
            (14, 7941.90),
            (16, 8304.30),
            (18, 8601.60),
            (20, 8891.10),
            (22, 9315.60),
        ],
    ),
    // W-5 publishes at >=20 YOS; earlier bands backfilled to the 20 value
    (
        PayGrade::W5,
        &[
            (0, 9797.40),
            (2, 9797.40),
            (3, 9797.40),
            (4, 9797.40),
            (6, 9797.40),
            (8, 9797.40),
            (10, 9797.40),
            (12, 9797.40),
            (14, 9797.40),
            (16, 9797.40),
            (18, 9797.40),
            (20, 9797.40),
            (22, 10294.50),
        ],
    ),
    // ---------- Officers ----------
    (
        PayGrade::O1,
        &[
            (0, 3998.40),
            (2, 4161.90),
            (3, 5031.30),
            (4, 5031.30),
            (6, 5031.30),
            (8, 5031.30),
            (10, 5031.30),
            (12, 5031.30),
            (14, 5031.30),
            (16, 5031.30),
            (18, 5031.30),
            (20, 5031.30),
            (22, 5031.30),
        ],
    ),
    (
        PayGrade::O2,
        &[
            (0, 4606.80),
            (2, 5246.70),
            (3, 6042.90),
            (4, 6247.20),
            (6, 6375.30),
            (8, 6375.30),
            (10, 6375.30),
            (12, 6375.30),
            (14, 6375.30),
            (16, 6375.30),
            (18, 6375.30),
            (20, 6375.30),
            (22, 6375.30),
        ],
    ),
    (
        PayGrade::O3,
        &[
            (0, 5331.60),
            (2, 6044.10),
            (3, 6522.60),
            (4, 7112.40),
            (6, 7453.80),
            (8, 7827.90),
            (10, 8069.10),
            (12, 8466.60),
            (14, 8674.50),
            (16, 8674.50),
            (18, 8674.50),
            (20, 8674.50),
            (22, 8674.50),
        ],
    ),
    (
        PayGrade::O4,
        &[
            (0, 6064.20),
            (2, 7019.70),
            (3, 7488.90),
            (4, 7592.40),
            (6, 8027.10),
            (8, 8493.60),
            (10, 9075.00),
            (12, 9526.20),
            (14, 9840.60),
            (16, 10020.90),
            (18, 10125.00),
            (20, 10125.00),
            (22, 10125.00),
        ],
    ),
    (
        PayGrade::O5,
        &[
            (0, 7028.40),
            (2, 7917.30),
            (3, 8465.40),
            (4, 8568.60),
            (6, 8910.90),
            (8, 9114.90),
            (10, 9564.90),
            (12, 9895.80),
            (14, 10322.70),
            (16, 10974.30),
            (18, 11285.10),
            (20, 11592.30),
            (22, 11940.90),
        ],
    ),
    (
        PayGrade::O6,
        &[
            (0, 8430.90),
            (2, 9261.90),
            (3, 9870.00),
            (4, 9870.00),
            (6, 9907.80),
            (8, 10332.30),
            (10, 10388.70),
            (12, 10388.70),
            (14, 10979.10),
            (16, 12022.80),
            (18, 12635.40),
            (20, 13247.70),
            (22, 13596.30),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yos_band_floors() {
        assert_eq!(yos_band(0), 0);
        assert_eq!(yos_band(1), 0);
        assert_eq!(yos_band(2), 2);
        assert_eq!(yos_band(5), 4);
        assert_eq!(yos_band(6), 6);
        assert_eq!(yos_band(7), 6);
        assert_eq!(yos_band(21), 20);
    }

    #[test]
    fn test_yos_band_upper_clamp() {
        assert_eq!(yos_band(22), 22);
        assert_eq!(yos_band(30), 22);
        assert_eq!(yos_band(40), 22);
    }

    #[test]
    fn test_2025_table_covers_all_grades() {
        let table = BasePayTable::year_2025();
        for grade in PayGrade::ALL {
            assert!(table.has_grade(grade), "missing grade {}", grade);
            let bands = table.bands_for(grade).unwrap();
            assert_eq!(bands.len(), YOS_BANDS.len(), "sparse row for {}", grade);
        }
    }

    #[test]
    fn test_known_cells() {
        let table = BasePayTable::year_2025();
        assert_eq!(table.cell(PayGrade::E6, 6), Some(4080.60));
        assert_eq!(table.cell(PayGrade::E1, 0), Some(2319.00));
        assert_eq!(table.cell(PayGrade::O6, 22), Some(13596.30));
        assert_eq!(table.cell(PayGrade::W5, 20), Some(9797.40));
    }

    #[test]
    fn test_missing_cell() {
        let table = BasePayTable::year_2025();
        // 5 is not a band
        assert_eq!(table.cell(PayGrade::E6, 5), None);
    }

    #[test]
    fn test_synthetic_table() {
        let table = BasePayTable::from_rows(&[(PayGrade::E5, &[(0, 100.0), (6, 200.0)])]);
        assert_eq!(table.cell(PayGrade::E5, 6), Some(200.0));
        assert_eq!(table.cell(PayGrade::E5, 4), None);
        assert!(!table.has_grade(PayGrade::E6));
    }
}
