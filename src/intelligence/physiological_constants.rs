// ABOUTME: Published equation coefficients and reference-range tables for body composition
// ABOUTME: Single constant source consumed by formulas, classification and explanations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on anthropometry and clinical nutrition research
//!
//! This module contains the coefficients of every equation the engine evaluates
//! and the reference ranges used to classify results. Nothing here is mutable;
//! all requests read the same compiled-in tables.

/// Body-density and body-fat equations
pub mod body_fat {
    /// Youngest age with a validated skinfold equation (years)
    pub const MIN_SUPPORTED_AGE: f64 = 6.0;

    /// Oldest age covered by the pediatric Slaughter equation (years)
    pub use nutriplan_core::models::PEDIATRIC_MAX_AGE;

    /// Slaughter et al. (1988), triceps + calf, males: slope and intercept
    pub const SLAUGHTER_MALE: (f64, f64) = (0.735, 1.0);

    /// Slaughter et al. (1988), triceps + calf, females: slope and intercept
    pub const SLAUGHTER_FEMALE: (f64, f64) = (0.610, 5.1);

    /// Jackson & Pollock (1978) density for men, triceps/subscapular/suprailiac sites.
    ///
    /// The published regressions stop at the squared sum; no cubic coefficient
    /// exists for either sex, so the density is evaluated as a quadratic.
    /// `[intercept, sum, sum², age]`
    pub const JACKSON_POLLOCK_MALE: [f64; 4] = [1.112_502_5, -0.001_312_5, 0.000_005_5, -0.000_244];

    /// Jackson, Pollock & Ward (1980) density for women, quadratic like the male form.
    /// `[intercept, sum, sum², age]`
    pub const JACKSON_POLLOCK_FEMALE: [f64; 4] = [1.099_492_1, -0.000_992_9, 0.000_002_3, -0.000_139_2];

    /// Durnin & Womersley (1974) male `(c, m)` for bands 17-19, 20-29, 30-39, 40-49, 50+
    pub const DURNIN_WOMERSLEY_MALE: [(f64, f64); 5] = [
        (1.1620, 0.0630),
        (1.1631, 0.0632),
        (1.1422, 0.0544),
        (1.1620, 0.0700),
        (1.1715, 0.0779),
    ];

    /// Durnin & Womersley (1974) female `(c, m)` for bands 17-19, 20-29, 30-39, 40-49, 50+
    pub const DURNIN_WOMERSLEY_FEMALE: [(f64, f64); 5] = [
        (1.1549, 0.0678),
        (1.1599, 0.0717),
        (1.1423, 0.0632),
        (1.1333, 0.0612),
        (1.1339, 0.0645),
    ];

    /// Hodgdon & Beckett (1984) US Navy male density `[intercept, log10(waist-neck), log10(height)]`
    pub const CIRCUMFERENCE_MALE: [f64; 3] = [1.0324, 0.190_77, 0.154_56];

    /// Hodgdon & Beckett (1984) US Navy female density `[intercept, log10(waist+hip-neck), log10(height)]`
    pub const CIRCUMFERENCE_FEMALE: [f64; 3] = [1.295_79, 0.350_04, 0.221_00];

    /// Siri (1961): %fat = 495/d - 450
    pub const SIRI: (f64, f64) = (495.0, 450.0);

    /// Brozek et al. (1963): %fat = 457/d - 414.2
    pub const BROZEK: (f64, f64) = (457.0, 414.2);

    /// Obesity-adjusted two-compartment constant: %fat = 498/d - 451
    pub const OBESITY_ADJUSTED: (f64, f64) = (498.0, 451.0);

    /// Deurenberg et al. (1991): %fat = 1.2·BMI + 0.23·age − 10.8·sex − 5.4
    pub const DEURENBERG: [f64; 4] = [1.2, 0.23, 10.8, 5.4];
}

/// Energy expenditure equations
pub mod energy {
    /// Katch-McArdle: BMR = 370 + 21.6 × lean mass
    pub const KATCH_MCARDLE: (f64, f64) = (370.0, 21.6);

    /// Harris-Benedict (Roza & Shizgal 1984) male `[constant, weight, height, age]`
    pub const HARRIS_BENEDICT_MALE: [f64; 4] = [88.362, 13.397, 4.799, 5.677];

    /// Harris-Benedict (Roza & Shizgal 1984) female `[constant, weight, height, age]`
    pub const HARRIS_BENEDICT_FEMALE: [f64; 4] = [447.593, 9.247, 3.098, 4.330];

    /// Mifflin-St Jeor `[weight, height, age, male constant, female constant]`
    pub const MIFFLIN_ST_JEOR: [f64; 5] = [10.0, 6.25, 5.0, 5.0, -161.0];

    /// TDEE multipliers for males `[sedentary, light, moderate, intense, athlete]`
    pub const ACTIVITY_MALE: [f64; 5] = [1.2, 1.56, 1.78, 2.1, 2.3];

    /// TDEE multipliers for females `[sedentary, light, moderate, intense, athlete]`
    pub const ACTIVITY_FEMALE: [f64; 5] = [1.2, 1.55, 1.64, 1.82, 2.0];
}

/// Fat-free and fat mass index bucket thresholds (Kyle et al. 2003; Kelly et al. 2009)
pub mod composition {
    /// Male FFMI: below is low, above the second value is high (kg/m²)
    pub const FFMI_MALE: (f64, f64) = (18.0, 20.0);
    /// Female FFMI thresholds (kg/m²)
    pub const FFMI_FEMALE: (f64, f64) = (15.0, 17.0);
    /// Male FMI thresholds (kg/m²)
    pub const FMI_MALE: (f64, f64) = (3.0, 6.0);
    /// Female FMI thresholds (kg/m²)
    pub const FMI_FEMALE: (f64, f64) = (5.0, 9.0);
}

/// Heath-Carter anthropometric somatotype
pub mod somatotype {
    /// Height normalisation for the endomorphy sum (cm)
    pub const ENDOMORPHY_REFERENCE_HEIGHT: f64 = 170.18;
    /// `[intercept, X, X², X³]`
    pub const ENDOMORPHY: [f64; 4] = [-0.7182, 0.1451, -0.000_68, 0.000_001_4];
    /// `[humerus, femur, corrected arm, corrected calf, height, constant]`
    pub const MESOMORPHY: [f64; 6] = [0.858, 0.601, 0.188, 0.161, -0.131, 4.5];
    /// Divisor bringing the raw mesomorphy score onto the rating scale
    pub const MESOMORPHY_SCALE: f64 = 5.7;
    /// Height-weight ratio above which the steep ectomorphy line applies
    pub const ECTOMORPHY_UPPER_HWR: f64 = 40.75;
    /// Height-weight ratio from which the shallow ectomorphy line applies
    pub const ECTOMORPHY_LOWER_HWR: f64 = 38.25;
    /// `(slope, intercept)` for HWR > 40.75
    pub const ECTOMORPHY_STEEP: (f64, f64) = (0.732, 28.58);
    /// `(slope, intercept)` for 38.25 <= HWR <= 40.75
    pub const ECTOMORPHY_SHALLOW: (f64, f64) = (0.463, 17.63);
    /// Floor of every component rating
    pub const MIN_RATING: f64 = 0.1;
}

/// Visceral index and abdominal fat estimation
pub mod abdominal {
    /// Weight of body-fat fraction in the athlete mixed index
    pub const MIXED_INDEX_FAT_WEIGHT: f64 = 0.4;
    /// Weight of waist-to-height ratio in the athlete mixed index
    pub const MIXED_INDEX_IAV_WEIGHT: f64 = 0.6;
    /// Mass density factor converting thickness × area into kg
    pub const MASS_FACTOR: f64 = 0.000_92;
    /// Method B area factor applied to (%fat/10) × waist
    pub const METHOD_B_AREA_FACTOR: f64 = 0.45;
    /// Method B unscaled multipliers `(male, female)`
    pub const METHOD_B_UNSCALED: (f64, f64) = (10.0, 15.0);
    /// Thickness skinfold coefficient
    pub const THICKNESS_SKINFOLD_COEF: f64 = 0.1;
    /// Thickness waist coefficient
    pub const THICKNESS_WAIST_COEF: f64 = 0.05;
    /// Thickness correction k for males by age band (18-39, 40-59, 60+)
    pub const THICKNESS_K_MALE: [f64; 3] = [3.0, 2.5, 2.0];
    /// Thickness correction k for females by age band (18-39, 40-59, 60+)
    pub const THICKNESS_K_FEMALE: [f64; 3] = [2.5, 2.0, 1.5];
    /// Kvist et al. (1988) male visceral mass regression `[intercept, waist, BMI]`
    pub const KVIST_MALE: [f64; 3] = [-2.5, 0.035, 0.06];
    /// Kvist et al. (1988) female visceral mass regression `[intercept, waist, BMI]`
    pub const KVIST_FEMALE: [f64; 3] = [-2.8, 0.028, 0.055];
}

/// Fractionation of body mass (De Rose & Guimarães 1980)
pub mod anthropometrics {
    /// Rocha bone mass: `3.02 × (H² × R × F × 400)^0.712`
    pub const BONE_MASS: (f64, f64, f64) = (3.02, 400.0, 0.712);
    /// Würch residual mass fraction for males
    pub const RESIDUAL_MALE: f64 = 0.241;
    /// Würch residual mass fraction for females
    pub const RESIDUAL_FEMALE: f64 = 0.209;
    /// Frisancho bone correction for arm muscle area, males (cm²)
    pub const ARM_BONE_CORRECTION_MALE: f64 = 10.0;
    /// Frisancho bone correction for arm muscle area, females (cm²)
    pub const ARM_BONE_CORRECTION_FEMALE: f64 = 6.5;
    /// BMI used for the reference ideal weight when no target %fat is given
    pub const REFERENCE_BMI: f64 = 22.0;
    /// Largest plausible change towards the ideal weight, as a share of current weight
    pub const MAX_WEIGHT_CHANGE_FRACTION: f64 = 0.5;
}

/// Reference ranges used by [`classification`](super::classification)
pub mod reference_ranges {
    use super::super::classification::{Band, RiskLevel, SexAgeTable, SexTable};

    const fn tiers(moderate_from: f64, high_from: f64, labels: [&'static str; 3]) -> [Band; 3] {
        [
            Band::new(moderate_from, labels[0], RiskLevel::Low),
            Band::new(high_from, labels[1], RiskLevel::Moderate),
            Band::open(labels[2], RiskLevel::High),
        ]
    }

    const fn fat_bands(low: f64, healthy: f64, high: f64, labels: [&'static str; 4]) -> [Band; 4] {
        [
            Band::new(low, labels[0], RiskLevel::Moderate),
            Band::new(healthy, labels[1], RiskLevel::Low),
            Band::new(high, labels[2], RiskLevel::Moderate),
            Band::open(labels[3], RiskLevel::High),
        ]
    }

    const FAT: [&str; 4] = ["Below healthy range", "Healthy", "Above healthy range", "Obese"];
    const ATHLETIC_FAT: [&str; 4] = ["Below athletic range", "Athletic", "Fitness", "Above athletic range"];
    const RISK: [&str; 3] = ["Low risk", "Increased risk", "High risk"];
    const LEVEL: [&str; 3] = ["Low", "Moderate", "High"];

    /// WHO adult BMI categories
    pub const BMI: [Band; 6] = [
        Band::new(18.5, "Underweight", RiskLevel::Moderate),
        Band::new(25.0, "Normal weight", RiskLevel::Low),
        Band::new(30.0, "Overweight", RiskLevel::Moderate),
        Band::new(35.0, "Obesity class I", RiskLevel::High),
        Band::new(40.0, "Obesity class II", RiskLevel::High),
        Band::open("Obesity class III", RiskLevel::High),
    ];

    /// WHO waist-hip ratio cutoffs
    pub const WAIST_HIP_RATIO: SexTable<3> = SexTable {
        male: tiers(0.90, 1.0, RISK),
        female: tiers(0.80, 0.85, RISK),
    };

    /// Body-fat % for non-athlete adults (Gallagher et al. 2000) by age band
    pub const BODY_FAT_GENERAL: SexAgeTable<4> = SexAgeTable {
        male: [
            fat_bands(8.0, 20.0, 25.0, FAT),
            fat_bands(11.0, 22.0, 28.0, FAT),
            fat_bands(13.0, 25.0, 30.0, FAT),
        ],
        female: [
            fat_bands(21.0, 33.0, 39.0, FAT),
            fat_bands(23.0, 34.0, 40.0, FAT),
            fat_bands(24.0, 36.0, 42.0, FAT),
        ],
    };

    /// Body-fat % for athletes (ACE categories)
    pub const BODY_FAT_ATHLETE: SexTable<4> = SexTable {
        male: fat_bands(6.0, 14.0, 18.0, ATHLETIC_FAT),
        female: fat_bands(14.0, 21.0, 25.0, ATHLETIC_FAT),
    };

    /// Body-fat % for children and adolescents (McCarthy et al. 2006, simplified)
    pub const BODY_FAT_PEDIATRIC: SexTable<4> = SexTable {
        male: fat_bands(10.0, 20.0, 25.0, FAT),
        female: fat_bands(15.0, 25.0, 30.0, FAT),
    };

    /// FFMI bucket labels
    pub const FFMI_LABELS: [&str; 3] = ["Low lean mass", "Adequate lean mass", "High lean mass"];

    /// FMI bucket labels
    pub const FMI_LABELS: [&str; 3] = ["Low fat mass", "Adequate fat mass", "High fat mass"];

    /// Metabolic age minus chronological age
    pub const METABOLIC_AGE_GAP: [Band; 4] = [
        Band::new(-1.0, "Younger than chronological age", RiskLevel::Low),
        Band::new(2.0, "In line with chronological age", RiskLevel::Low),
        Band::new(6.0, "Older than chronological age", RiskLevel::Moderate),
        Band::open("Much older than chronological age", RiskLevel::High),
    ];

    /// Waist-to-height visceral index (IAV) for non-athletes by age band
    pub const VISCERAL_INDEX: SexAgeTable<3> = SexAgeTable {
        male: [
            tiers(0.50, 0.57, RISK),
            tiers(0.52, 0.59, RISK),
            tiers(0.55, 0.62, RISK),
        ],
        female: [
            tiers(0.49, 0.55, RISK),
            tiers(0.51, 0.57, RISK),
            tiers(0.54, 0.60, RISK),
        ],
    };

    /// Athlete mixed index (two cutoffs per sex)
    pub const MIXED_INDEX: SexTable<3> = SexTable {
        male: tiers(0.35, 0.42, RISK),
        female: tiers(0.40, 0.47, RISK),
    };

    /// Abdominal fat area on the Method A scale (cm²)
    pub const ABDOMINAL_AREA_METHOD_A: SexAgeTable<3> = SexAgeTable {
        male: [
            tiers(250.0, 400.0, LEVEL),
            tiers(230.0, 370.0, LEVEL),
            tiers(210.0, 340.0, LEVEL),
        ],
        female: [
            tiers(280.0, 430.0, LEVEL),
            tiers(260.0, 400.0, LEVEL),
            tiers(240.0, 370.0, LEVEL),
        ],
    };

    /// Abdominal fat area on the Method B scale
    pub const ABDOMINAL_AREA_METHOD_B: SexAgeTable<3> = SexAgeTable {
        male: [
            tiers(70.0, 110.0, LEVEL),
            tiers(65.0, 100.0, LEVEL),
            tiers(60.0, 95.0, LEVEL),
        ],
        female: [
            tiers(100.0, 150.0, LEVEL),
            tiers(95.0, 140.0, LEVEL),
            tiers(90.0, 135.0, LEVEL),
        ],
    };

    /// Abdominal fat thickness (cm)
    pub const ABDOMINAL_THICKNESS: SexAgeTable<3> = SexAgeTable {
        male: [
            tiers(3.0, 4.5, LEVEL),
            tiers(3.2, 4.8, LEVEL),
            tiers(3.4, 5.0, LEVEL),
        ],
        female: [
            tiers(3.5, 5.0, LEVEL),
            tiers(3.7, 5.3, LEVEL),
            tiers(3.9, 5.5, LEVEL),
        ],
    };

    /// Visceral fat mass (kg)
    pub const ABDOMINAL_MASS: SexAgeTable<3> = SexAgeTable {
        male: [
            tiers(1.5, 3.0, LEVEL),
            tiers(1.8, 3.3, LEVEL),
            tiers(2.0, 3.5, LEVEL),
        ],
        female: [
            tiers(1.0, 2.0, LEVEL),
            tiers(1.2, 2.3, LEVEL),
            tiers(1.4, 2.5, LEVEL),
        ],
    };
}
