//! Grid sampling of potential and field over the whole canvas.
//!
//! A pass evaluates the superposed potential and field at every sample
//! point, compresses both with [`signed_sqrt`] and records the largest
//! magnitudes for normalisation. A sample landing on a charge is singular:
//! the most recently added charge is evicted and the pass restarts from the
//! origin.

use crate::charges::ChargeStore;
use crate::error::SampleError;
use crate::grid::Grid;
use crate::physics::{
    electric_field, electric_potential, signed_sqrt, FieldVector, PointCharge,
};

/// Largest sample magnitudes of one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub max_potential: f64,
    pub max_field: f64,
}

/// Everything one pass produces. Rebuilt from scratch on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub potential: Grid<f64>,
    pub field: Grid<FieldVector>,
    pub scale: ScaleState,
    /// Charges removed from the store to get a finite pass.
    pub evicted: Vec<PointCharge>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSampler {
    pub width: usize,
    pub height: usize,
    pub potential_res: usize,
    pub field_res: usize,
}

#[derive(Debug, Clone, Copy)]
struct Singular {
    x: usize,
    y: usize,
}

/// Rescaled superposed potential at `(x, y)`; zero with no charges.
pub fn potential_at(charges: &[PointCharge], x: f64, y: f64) -> f64 {
    let v: f64 = charges
        .iter()
        .map(|c| electric_potential(c, x, y))
        .sum();
    signed_sqrt(v)
}

/// Rescaled superposed field at `(x, y)`, each component compressed on its
/// own; the zero vector with no charges.
pub fn field_at(charges: &[PointCharge], x: f64, y: f64) -> FieldVector {
    let e = charges
        .iter()
        .map(|c| electric_field(c, x, y))
        .fold(FieldVector::ZERO, |acc, e| acc + e);
    FieldVector::new(signed_sqrt(e.x), signed_sqrt(e.y))
}

impl FieldSampler {
    pub fn new(
        width: usize,
        height: usize,
        potential_res: usize,
        field_res: usize,
    ) -> Self {
        Self {
            width,
            height,
            potential_res,
            field_res,
        }
    }

    /// Run a full pass, evicting charges from `store` until every sample is
    /// finite. Each eviction costs one retry, so at most `len + 1` attempts
    /// are made.
    pub fn sample(&self, store: &mut ChargeStore) -> Result<Sample, SampleError> {
        let attempts = store.len() + 1;
        let mut evicted = Vec::new();
        for _ in 0..attempts {
            match self.try_pass(store.charges()) {
                Ok((potential, field, scale)) => {
                    println!(
                        "Maximum electric potential magnitude: {}",
                        scale.max_potential
                    );
                    println!(
                        "Maximum electric field magnitude: {}",
                        scale.max_field
                    );
                    return Ok(Sample {
                        potential,
                        field,
                        scale,
                        evicted,
                    });
                }
                Err(Singular { x, y }) => match store.remove_last() {
                    Some(c) => {
                        eprintln!(
                            "singular sample at ({x}, {y}), dropping charge {:?}",
                            c
                        );
                        evicted.push(c);
                    }
                    None => break,
                },
            }
        }
        Err(SampleError::RetriesExhausted { attempts })
    }

    fn try_pass(
        &self,
        charges: &[PointCharge],
    ) -> Result<(Grid<f64>, Grid<FieldVector>, ScaleState), Singular> {
        let mut scale = ScaleState::default();

        let potential =
            Grid::try_build(self.width, self.height, self.potential_res, |x, y| {
                let v = potential_at(charges, x as f64, y as f64);
                if !v.is_finite() {
                    return Err(Singular { x, y });
                }
                scale.max_potential = scale.max_potential.max(v.abs());
                Ok(v)
            })?;

        let field =
            Grid::try_build(self.width, self.height, self.field_res, |x, y| {
                let e = field_at(charges, x as f64, y as f64);
                if !e.is_finite() {
                    return Err(Singular { x, y });
                }
                scale.max_field = scale.max_field.max(e.magnitude());
                Ok(e)
            })?;

        Ok((potential, field, scale))
    }
}
