use log::debug;

use crate::encoding::encode_rule;
use crate::encoding::DecisionGrid;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// The complete boolean model of a scheduling instance.
///
/// The decision grid is created first, so the variable of resident `r` at hour `t` has index
/// `r * horizon_hours + t`; auxiliary variables follow. The objective minimises the total number
/// of worked hours.
#[derive(Clone, Debug)]
pub struct ScheduleModel {
    params: SchedulingParams,
    grid: DecisionGrid,
    model: Model,
}

impl ScheduleModel {
    pub fn build(params: &SchedulingParams) -> ScheduleModel {
        let mut model = Model::default();
        let grid = DecisionGrid::new(&mut model, params.residents(), params.horizon_hours());

        for rule in Rule::ALL {
            encode_rule(rule, &grid, params, &mut model);
        }

        model.minimise(grid.cells().iter().copied().map(Term::unit));

        debug!(
            "Built a model with {} variables ({} grid cells)",
            model.num_variables(),
            grid.cells().len()
        );
        for rule in Rule::ALL {
            debug!(
                "Rule {rule} contributes {} constraints",
                model.constraint_count(rule)
            );
        }

        ScheduleModel {
            params: params.clone(),
            grid,
            model,
        }
    }

    pub fn params(&self) -> &SchedulingParams {
        &self.params
    }

    pub fn grid(&self) -> &DecisionGrid {
        &self.grid
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}
