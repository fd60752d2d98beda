//! Predict command implementation

use anyhow::Result;
use calhouse_core::config::DataPaths;
use calhouse_core::models::FormInput;
use calhouse_core::{FormController, Predictor};
use calhouse_model::load_model;
use calhouse_store::load_counties;

use super::explained;
use crate::cli::PredictArgs;
use crate::output::OutputWriter;
use crate::output_types::PredictOutput;

pub fn execute(args: PredictArgs, paths: &DataPaths, output: &OutputWriter) -> Result<()> {
    let input = FormInput::new(args.county).with_age(args.age).with_income(args.income);
    explained(input.validate(), paths)?;

    let counties = explained(load_counties(&paths.geo_data), paths)?;
    let model = explained(load_model(&paths.model), paths)?;

    let form = FormController::new(&counties, &model);
    let prediction = explained(form.submit(&input), paths)?;

    if output.is_json() {
        return output.result(PredictOutput {
            county: prediction.county,
            housing_median_age: input.housing_median_age,
            median_income: input.median_income,
            label: prediction.label.to_string(),
            price: prediction.price,
            display: prediction.display,
            model: model.model_name().to_string(),
        });
    }

    output.section(&prediction.county);
    output.kv("House age", input.housing_median_age);
    output.kv("Median income (thousands US$)", input.median_income);
    output.kv("Model", model.model_name());
    output.success(format!("{} {}", prediction.label, prediction.display));
    Ok(())
}
