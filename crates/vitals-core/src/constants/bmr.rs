// ABOUTME: Mifflin-St Jeor equation coefficients for basal metabolic rate
// ABOUTME: Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// kcal per kilogram of body weight
pub const MSJ_WEIGHT_COEF: f64 = 10.0;

/// kcal per centimeter of height
pub const MSJ_HEIGHT_COEF: f64 = 6.25;

/// kcal per year of age (negative)
pub const MSJ_AGE_COEF: f64 = -5.0;

/// Constant term for men
pub const MSJ_MALE_CONSTANT: f64 = 5.0;

/// Constant term for women
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;
