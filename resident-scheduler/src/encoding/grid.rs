use crate::model::BoolVar;
use crate::model::Model;
use crate::model::VariableOrigin;

/// One boolean variable per (resident, hour), stored row-major.
#[derive(Clone, Debug)]
pub struct DecisionGrid {
    residents: usize,
    horizon_hours: usize,
    cells: Vec<BoolVar>,
}

impl DecisionGrid {
    /// Creates the variables of an `residents` by `horizon_hours` grid in `model`.
    pub(crate) fn new(model: &mut Model, residents: usize, horizon_hours: usize) -> DecisionGrid {
        let cells = (0..residents)
            .flat_map(|resident| (0..horizon_hours).map(move |hour| (resident, hour)))
            .map(|(resident, hour)| model.new_variable(VariableOrigin::Cell { resident, hour }))
            .collect();

        DecisionGrid {
            residents,
            horizon_hours,
            cells,
        }
    }

    pub fn residents(&self) -> usize {
        self.residents
    }

    pub fn horizon_hours(&self) -> usize {
        self.horizon_hours
    }

    /// The variable of `resident` at `hour`, or `None` if the hour lies outside the horizon.
    pub fn get(&self, resident: usize, hour: usize) -> Option<BoolVar> {
        if resident >= self.residents || hour >= self.horizon_hours {
            return None;
        }

        Some(self.cells[resident * self.horizon_hours + hour])
    }

    /// All variables of `resident`, ordered by hour.
    pub fn row(&self, resident: usize) -> &[BoolVar] {
        let start = resident * self.horizon_hours;
        &self.cells[start..start + self.horizon_hours]
    }

    /// The variables of all residents at `hour`.
    pub fn column(&self, hour: usize) -> impl Iterator<Item = BoolVar> + '_ {
        self.cells
            .iter()
            .skip(hour)
            .step_by(self.horizon_hours)
            .copied()
    }

    pub fn cells(&self) -> &[BoolVar] {
        &self.cells
    }
}
