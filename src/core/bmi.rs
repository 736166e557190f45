use crate::config::CalculatorSettings;
use crate::domain::model::Coder;
use crate::utils::error::{BmiError, Result};

/// Computes BMI figures for coders.
///
/// The default calculator flags a diet above a BMI of 25.0 and reports
/// scores with two decimals. Every computation fails with
/// [`BmiError::Arithmetic`] when a height is exactly zero; no other input
/// is validated.
#[derive(Debug, Clone, Default)]
pub struct BmiCalculator {
    settings: CalculatorSettings,
}

impl BmiCalculator {
    pub fn new(settings: CalculatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    pub fn is_diet_recommended(&self, weight: f64, height: f64) -> Result<bool> {
        let bmi = compute_bmi(weight, height)?;
        let recommended = bmi > self.settings.diet_threshold;
        tracing::debug!(
            "Diet check: weight={}, height={}, bmi={:.2}, recommended={}",
            weight,
            height,
            bmi,
            recommended
        );
        Ok(recommended)
    }

    /// Returns the coder with the highest BMI, or `None` for an empty slice.
    ///
    /// Ties keep the earliest coder.
    pub fn find_coder_with_worst_bmi<'a>(&self, coders: &'a [Coder]) -> Result<Option<&'a Coder>> {
        let mut worst: Option<(&Coder, f64)> = None;

        for coder in coders {
            let bmi = coder_bmi(coder)?;
            match worst {
                Some((_, worst_bmi)) if bmi > worst_bmi => worst = Some((coder, bmi)),
                None => worst = Some((coder, bmi)),
                _ => {}
            }
        }

        if let Some((coder, bmi)) = worst {
            tracing::debug!(
                "Worst BMI among {} coders: {:.2} (height={}, weight={})",
                coders.len(),
                bmi,
                coder.height,
                coder.weight
            );
        }

        Ok(worst.map(|(coder, _)| coder))
    }

    /// Rounded BMI per coder, in input order. Fails as a whole on the
    /// first zero height.
    pub fn get_bmi_scores(&self, coders: &[Coder]) -> Result<Vec<f64>> {
        let scores = coders
            .iter()
            .map(|coder| coder_bmi(coder).map(|bmi| self.round_score(bmi)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Computed {} BMI scores", scores.len());
        Ok(scores)
    }

    // Half away from zero, i.e. half-up for the positive values BMI produces.
    fn round_score(&self, bmi: f64) -> f64 {
        let factor = 10f64.powi(self.settings.score_precision as i32);
        (bmi * factor).round() / factor
    }
}

fn coder_bmi(coder: &Coder) -> Result<f64> {
    compute_bmi(coder.weight, coder.height)
}

fn compute_bmi(weight: f64, height: f64) -> Result<f64> {
    if height == 0.0 {
        tracing::warn!("Cannot compute BMI for weight={} with zero height", weight);
        return Err(BmiError::division_by_zero());
    }
    Ok(weight / (height * height))
}

/// `true` when weight / height² is above 25.0.
pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool> {
    BmiCalculator::default().is_diet_recommended(weight, height)
}

pub fn find_coder_with_worst_bmi(coders: &[Coder]) -> Result<Option<&Coder>> {
    BmiCalculator::default().find_coder_with_worst_bmi(coders)
}

pub fn get_bmi_scores(coders: &[Coder]) -> Result<Vec<f64>> {
    BmiCalculator::default().get_bmi_scores(coders)
}
