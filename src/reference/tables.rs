//! Embedded growth reference tables
//!
//! Simplified WHO-style sample data: five percentile anchors per age for
//! weight, length/height, head circumference and BMI, 0-60 months.
//! Ages are sorted ascending with no duplicates; `store::validate_reference_tables`
//! asserts this (and anchor monotonicity) at startup.
//!
//! Columns: age (months), p3, p15, p50, p85, p97

use super::AgeRow;

// Weight-for-age, boys (kg)
pub static BOYS_WEIGHT: &[AgeRow] = &[
    AgeRow::new(0, 2.5, 2.9, 3.3, 3.9, 4.4),
    AgeRow::new(1, 3.4, 3.9, 4.5, 5.1, 5.8),
    AgeRow::new(2, 4.3, 4.9, 5.6, 6.3, 7.1),
    AgeRow::new(3, 5.0, 5.7, 6.4, 7.2, 8.0),
    AgeRow::new(4, 5.6, 6.2, 7.0, 7.8, 8.7),
    AgeRow::new(5, 6.0, 6.7, 7.5, 8.4, 9.3),
    AgeRow::new(6, 6.4, 7.1, 7.9, 8.8, 9.8),
    AgeRow::new(9, 7.1, 7.8, 8.6, 9.6, 10.5),
    AgeRow::new(12, 7.7, 8.4, 9.6, 10.8, 12.0),
    AgeRow::new(15, 8.3, 9.0, 10.3, 11.7, 13.1),
    AgeRow::new(18, 8.8, 9.6, 10.9, 12.4, 14.1),
    AgeRow::new(24, 9.7, 10.5, 12.2, 14.3, 16.3),
    AgeRow::new(30, 10.4, 11.3, 13.3, 15.7, 18.3),
    AgeRow::new(36, 11.0, 12.0, 14.2, 16.9, 20.0),
    AgeRow::new(42, 11.6, 12.6, 15.0, 18.0, 21.5),
    AgeRow::new(48, 12.1, 13.1, 15.7, 19.0, 22.9),
    AgeRow::new(54, 12.6, 13.7, 16.4, 19.9, 24.2),
    AgeRow::new(60, 13.1, 14.2, 17.0, 20.7, 25.4),
];

// Weight-for-age, girls (kg)
pub static GIRLS_WEIGHT: &[AgeRow] = &[
    AgeRow::new(0, 2.4, 2.8, 3.2, 3.7, 4.2),
    AgeRow::new(1, 3.2, 3.6, 4.2, 4.8, 5.5),
    AgeRow::new(2, 3.9, 4.5, 5.1, 5.8, 6.6),
    AgeRow::new(3, 4.5, 5.2, 5.8, 6.6, 7.5),
    AgeRow::new(4, 5.0, 5.7, 6.4, 7.3, 8.2),
    AgeRow::new(5, 5.4, 6.1, 6.9, 7.8, 8.8),
    AgeRow::new(6, 5.7, 6.5, 7.3, 8.2, 9.3),
    AgeRow::new(9, 6.4, 7.0, 8.0, 9.0, 10.2),
    AgeRow::new(12, 7.0, 7.6, 8.9, 10.1, 11.5),
    AgeRow::new(15, 7.4, 8.1, 9.6, 11.0, 12.6),
    AgeRow::new(18, 7.8, 8.6, 10.2, 11.8, 13.7),
    AgeRow::new(24, 8.5, 9.4, 11.5, 13.5, 15.8),
    AgeRow::new(30, 9.1, 10.1, 12.5, 15.0, 17.6),
    AgeRow::new(36, 9.6, 10.7, 13.3, 16.3, 19.2),
    AgeRow::new(42, 10.1, 11.3, 14.0, 17.4, 20.7),
    AgeRow::new(48, 10.5, 11.8, 14.6, 18.4, 22.1),
    AgeRow::new(54, 11.0, 12.3, 15.2, 19.3, 23.5),
    AgeRow::new(60, 11.4, 12.7, 15.8, 20.2, 24.9),
];

// Length/height-for-age, boys (cm)
pub static BOYS_HEIGHT: &[AgeRow] = &[
    AgeRow::new(0, 46.1, 47.5, 49.9, 52.3, 53.7),
    AgeRow::new(1, 50.8, 52.3, 54.7, 57.1, 58.6),
    AgeRow::new(2, 54.4, 56.0, 58.4, 60.8, 62.4),
    AgeRow::new(3, 57.3, 59.0, 61.4, 63.9, 65.5),
    AgeRow::new(4, 59.7, 61.5, 63.9, 66.4, 68.0),
    AgeRow::new(5, 61.7, 63.6, 66.0, 68.5, 70.1),
    AgeRow::new(6, 63.3, 65.3, 67.6, 70.1, 71.9),
    AgeRow::new(9, 67.0, 69.1, 71.7, 74.5, 76.5),
    AgeRow::new(12, 71.0, 73.2, 76.1, 79.3, 81.5),
    AgeRow::new(15, 74.8, 77.1, 80.2, 83.6, 86.0),
    AgeRow::new(18, 78.0, 80.5, 83.9, 87.7, 90.4),
    AgeRow::new(24, 82.3, 85.1, 89.2, 93.9, 97.3),
    AgeRow::new(30, 85.7, 88.7, 93.2, 98.3, 102.0),
    AgeRow::new(36, 88.7, 91.9, 96.5, 102.0, 106.1),
    AgeRow::new(42, 91.4, 94.7, 99.3, 105.0, 109.4),
    AgeRow::new(48, 93.9, 97.3, 102.0, 107.7, 112.5),
    AgeRow::new(54, 96.2, 99.7, 104.4, 110.2, 115.2),
    AgeRow::new(60, 98.3, 102.0, 106.6, 112.5, 117.7),
];

// Length/height-for-age, girls (cm)
pub static GIRLS_HEIGHT: &[AgeRow] = &[
    AgeRow::new(0, 45.4, 46.8, 49.1, 51.4, 52.9),
    AgeRow::new(1, 49.8, 51.3, 53.7, 56.1, 57.6),
    AgeRow::new(2, 53.0, 54.6, 57.1, 59.5, 61.1),
    AgeRow::new(3, 55.6, 57.3, 59.8, 62.4, 64.0),
    AgeRow::new(4, 57.8, 59.5, 62.1, 64.8, 66.4),
    AgeRow::new(5, 59.6, 61.4, 64.0, 66.8, 68.5),
    AgeRow::new(6, 61.2, 63.0, 65.7, 68.6, 70.3),
    AgeRow::new(9, 64.7, 66.6, 69.4, 72.6, 74.7),
    AgeRow::new(12, 68.9, 71.0, 74.0, 77.5, 80.0),
    AgeRow::new(15, 72.8, 75.0, 78.2, 82.0, 84.9),
    AgeRow::new(18, 76.0, 78.4, 81.9, 86.1, 89.3),
    AgeRow::new(24, 80.0, 82.8, 87.1, 92.2, 96.1),
    AgeRow::new(30, 83.3, 86.4, 91.7, 97.6, 102.0),
    AgeRow::new(36, 86.2, 89.6, 95.6, 102.3, 107.2),
    AgeRow::new(42, 88.9, 92.5, 99.0, 106.6, 112.0),
    AgeRow::new(48, 91.2, 95.0, 102.0, 110.2, 116.3),
    AgeRow::new(54, 93.3, 97.4, 104.7, 113.5, 120.2),
    AgeRow::new(60, 95.2, 99.5, 107.2, 116.6, 123.9),
];

// Head circumference-for-age, boys (cm)
pub static BOYS_HEAD_CIRCUMFERENCE: &[AgeRow] = &[
    AgeRow::new(0, 32.6, 33.9, 35.8, 37.6, 38.9),
    AgeRow::new(1, 35.8, 37.3, 39.5, 41.5, 42.6),
    AgeRow::new(2, 38.3, 39.8, 42.0, 44.2, 45.5),
    AgeRow::new(3, 40.0, 41.5, 43.9, 46.0, 47.4),
    AgeRow::new(4, 41.2, 42.8, 45.2, 47.4, 48.9),
    AgeRow::new(5, 42.2, 43.8, 46.1, 48.4, 50.0),
    AgeRow::new(6, 43.0, 44.6, 46.9, 49.2, 50.8),
    AgeRow::new(9, 44.3, 45.9, 48.0, 50.2, 51.5),
    AgeRow::new(12, 45.2, 46.6, 48.6, 50.7, 51.9),
    AgeRow::new(15, 45.8, 47.2, 49.0, 51.0, 52.3),
    AgeRow::new(18, 46.2, 47.6, 49.4, 51.4, 52.6),
    AgeRow::new(24, 46.9, 48.2, 49.9, 51.8, 53.0),
    AgeRow::new(30, 47.3, 48.6, 50.2, 52.0, 53.1),
    AgeRow::new(36, 47.6, 48.9, 50.4, 52.2, 53.3),
    AgeRow::new(42, 47.8, 49.0, 50.6, 52.3, 53.4),
    AgeRow::new(48, 47.9, 49.2, 50.7, 52.4, 53.5),
    AgeRow::new(54, 48.1, 49.3, 50.8, 52.5, 53.6),
    AgeRow::new(60, 48.2, 49.4, 50.9, 52.6, 53.7),
];

// Head circumference-for-age, girls (cm)
pub static GIRLS_HEAD_CIRCUMFERENCE: &[AgeRow] = &[
    AgeRow::new(0, 32.0, 33.3, 35.1, 36.9, 38.1),
    AgeRow::new(1, 35.0, 36.5, 38.4, 40.3, 41.5),
    AgeRow::new(2, 37.1, 38.7, 40.7, 42.6, 43.9),
    AgeRow::new(3, 38.7, 40.3, 42.2, 44.2, 45.6),
    AgeRow::new(4, 39.9, 41.5, 43.4, 45.4, 46.9),
    AgeRow::new(5, 40.8, 42.5, 44.3, 46.4, 47.9),
    AgeRow::new(6, 41.5, 43.2, 45.0, 47.1, 48.6),
    AgeRow::new(9, 42.8, 44.5, 46.2, 48.2, 49.6),
    AgeRow::new(12, 43.6, 45.2, 46.9, 48.7, 50.0),
    AgeRow::new(15, 44.2, 45.8, 47.4, 49.2, 50.4),
    AgeRow::new(18, 44.7, 46.2, 47.8, 49.5, 50.7),
    AgeRow::new(24, 45.3, 46.8, 48.4, 50.0, 51.1),
    AgeRow::new(30, 45.7, 47.2, 48.7, 50.3, 51.4),
    AgeRow::new(36, 46.0, 47.4, 49.0, 50.5, 51.6),
    AgeRow::new(42, 46.2, 47.6, 49.2, 50.7, 51.7),
    AgeRow::new(48, 46.4, 47.8, 49.3, 50.8, 51.8),
    AgeRow::new(54, 46.5, 47.9, 49.4, 50.9, 51.9),
    AgeRow::new(60, 46.6, 48.0, 49.5, 51.0, 52.0),
];

// BMI-for-age, boys (kg/m²)
pub static BOYS_BMI: &[AgeRow] = &[
    AgeRow::new(0, 11.1, 12.4, 13.4, 14.8, 16.3),
    AgeRow::new(1, 12.9, 14.3, 15.6, 17.2, 18.8),
    AgeRow::new(2, 14.7, 15.9, 17.3, 18.8, 20.4),
    AgeRow::new(3, 15.8, 16.9, 18.0, 19.4, 20.9),
    AgeRow::new(4, 16.3, 17.3, 18.4, 19.7, 21.0),
    AgeRow::new(5, 16.6, 17.5, 18.6, 19.8, 21.0),
    AgeRow::new(6, 16.6, 17.5, 18.6, 19.7, 20.9),
    AgeRow::new(9, 16.1, 16.9, 17.8, 18.8, 19.9),
    AgeRow::new(12, 15.5, 16.3, 17.2, 18.3, 19.4),
    AgeRow::new(15, 15.2, 16.0, 16.9, 17.9, 19.0),
    AgeRow::new(18, 14.9, 15.7, 16.6, 17.8, 18.9),
    AgeRow::new(24, 14.7, 15.5, 16.5, 17.8, 19.0),
    AgeRow::new(30, 14.6, 15.4, 16.4, 17.8, 19.1),
    AgeRow::new(36, 14.5, 15.3, 16.4, 17.8, 19.3),
    AgeRow::new(42, 14.4, 15.2, 16.4, 17.9, 19.4),
    AgeRow::new(48, 14.3, 15.2, 16.4, 17.9, 19.6),
    AgeRow::new(54, 14.3, 15.1, 16.4, 18.0, 19.7),
    AgeRow::new(60, 14.2, 15.1, 16.4, 18.0, 19.8),
];

// BMI-for-age, girls (kg/m²)
pub static GIRLS_BMI: &[AgeRow] = &[
    AgeRow::new(0, 10.8, 12.0, 13.1, 14.4, 15.7),
    AgeRow::new(1, 12.4, 13.7, 15.0, 16.4, 17.9),
    AgeRow::new(2, 14.1, 15.4, 16.8, 18.2, 19.7),
    AgeRow::new(3, 15.1, 16.3, 17.5, 18.9, 20.2),
    AgeRow::new(4, 15.7, 16.8, 17.9, 19.2, 20.4),
    AgeRow::new(5, 16.0, 17.1, 18.1, 19.3, 20.4),
    AgeRow::new(6, 16.1, 17.1, 18.1, 19.2, 20.2),
    AgeRow::new(9, 15.7, 16.5, 17.5, 18.5, 19.5),
    AgeRow::new(12, 15.2, 16.0, 16.9, 18.0, 19.0),
    AgeRow::new(15, 14.9, 15.7, 16.6, 17.7, 18.8),
    AgeRow::new(18, 14.6, 15.4, 16.4, 17.6, 18.7),
    AgeRow::new(24, 14.3, 15.2, 16.3, 17.6, 18.8),
    AgeRow::new(30, 14.2, 15.1, 16.2, 17.6, 18.9),
    AgeRow::new(36, 14.1, 15.0, 16.1, 17.6, 19.0),
    AgeRow::new(42, 14.0, 14.9, 16.1, 17.6, 19.2),
    AgeRow::new(48, 13.9, 14.9, 16.1, 17.7, 19.3),
    AgeRow::new(54, 13.9, 14.8, 16.0, 17.7, 19.5),
    AgeRow::new(60, 13.8, 14.8, 16.0, 17.8, 19.6),
];
