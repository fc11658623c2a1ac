use rand::Rng;

use crate::config::Layout;
use crate::physics::PointCharge;

/// Append-only list of placed charges, oldest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChargeStore {
    charges: Vec<PointCharge>,
}

impl ChargeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting arrangement: a lone unit charge on compact viewports, a
    /// 4 / -5 dipole straddling the centre otherwise.
    pub fn initial(width: f64, height: f64, layout: Layout) -> Self {
        let mut store = Self::new();
        match layout {
            Layout::Compact => {
                store.add_charge(width / 2.0, height / 2.0, 1.0);
            }
            Layout::Full => {
                store.add_charge(width / 2.0 - 200.0, height / 2.0, 4.0);
                store.add_charge(width / 2.0 + 200.0, height / 2.0, -5.0);
            }
        }
        store
    }

    pub fn add_charge(&mut self, x: f64, y: f64, magnitude: f64) {
        self.charges.push(PointCharge::new(x, y, magnitude));
    }

    pub fn remove_last(&mut self) -> Option<PointCharge> {
        self.charges.pop()
    }

    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }
}

/// Charge for a primary click: `[0, max)`, remapped to `[-0.4 max, 0.4 max)`
/// on compact viewports.
pub fn random_primary<R: Rng>(rng: &mut R, max: f64, layout: Layout) -> f64 {
    let c = rng.gen_range(0.0..max);
    match layout {
        Layout::Compact => (c * 2.0 - max) * 0.4,
        Layout::Full => c,
    }
}

/// Charge for a secondary click: `(-max, 0]`.
pub fn random_secondary<R: Rng>(rng: &mut R, max: f64) -> f64 {
    -rng.gen_range(0.0..max)
}
