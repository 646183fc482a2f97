// ABOUTME: Basal metabolic rate derived from aggregated body weight and profile attributes
// ABOUTME: Mifflin-St Jeor equation with configurable coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Derived Metric Calculator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use serde::{Deserialize, Serialize};
use vitals_core::constants::bmr::{
    MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
};
use vitals_core::errors::{AppError, AppResult};
use vitals_core::models::{Gender, Profile};

/// Mifflin-St Jeor formula coefficients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: MSJ_WEIGHT_COEF,
            msj_height_coef: MSJ_HEIGHT_COEF,
            msj_age_coef: MSJ_AGE_COEF,
            msj_male_constant: MSJ_MALE_CONSTANT,
            msj_female_constant: MSJ_FEMALE_CONSTANT,
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is not rounded; callers round for display.
///
/// # Errors
///
/// Returns `InvalidInput` if `weight_kg` is not a positive finite number.
/// Callers resolve a fallback weight through the aggregator before calling.
pub fn compute_bmr(weight_kg: f64, profile: &Profile) -> AppResult<f64> {
    compute_bmr_with_config(weight_kg, profile, &BmrConfig::default())
}

/// [`compute_bmr`] with explicit coefficients
///
/// # Errors
///
/// Returns `InvalidInput` if `weight_kg` is not a positive finite number
pub fn compute_bmr_with_config(
    weight_kg: f64,
    profile: &Profile,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be positive to derive BMR, got {weight_kg}"
        )));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
}
