//! Plain text and JSON output of the command line tool.

use std::io::{self, Write};

use serde::Serialize;
use synthetic::{
    generator, Algorithm, Direction, Extras, HyperparameterSet, ParamKind, ParamValue, Run,
};

pub fn algorithms(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<15}{:<16}PRIMARY METRIC", "ID", "NAME")?;
    for algorithm in Algorithm::ALL {
        let profile = generator::profile(&HyperparameterSet::defaults(algorithm));
        writeln!(out, "{:<15}{:<16}{}", algorithm.id(), algorithm.title(), profile.primary)?;
    }
    Ok(())
}

pub fn params(out: &mut impl Write, params: &HyperparameterSet) -> io::Result<()> {
    writeln!(out, "{} hyperparameters", params.algorithm().title())?;
    for (spec, value) in params.values() {
        let range = match spec.kind {
            ParamKind::Number {
                min,
                max,
                step,
                integer: true,
            } => format!("integer {min}..={max}, step {step}"),
            ParamKind::Number { min, max, step, .. } => format!("{min}..={max}, step {step}"),
            ParamKind::Choice { options } => options.join(" | "),
        };
        writeln!(
            out,
            "  {:<18}{:<12}{}",
            spec.name,
            format_value(value),
            range
        )?;
    }
    Ok(())
}

pub fn run(out: &mut impl Write, params: &HyperparameterSet, run: &Run) -> io::Result<()> {
    let metrics = &run.metrics;
    let assignments: Vec<String> = params
        .values()
        .into_iter()
        .map(|(spec, value)| format!("{}={}", spec.name, format_value(value)))
        .collect();

    writeln!(out, "{} run", metrics.algorithm.title())?;
    writeln!(out, "  {}", assignments.join(" "))?;
    writeln!(out)?;

    let hint = match metrics.direction {
        Direction::HigherIsBetter => "higher is better",
        Direction::LowerIsBetter => "lower is better",
    };
    writeln!(
        out,
        "  {:<12}{:.3}  ({hint})",
        metrics.primary.name, metrics.primary.value
    )?;
    for metric in &metrics.secondary {
        writeln!(out, "  {:<12}{:.3}", metric.name, metric.value)?;
    }
    writeln!(out, "  {:<12}{:.2}s", "elapsed", metrics.elapsed_secs)?;
    writeln!(out)?;

    let curve: Vec<String> = run
        .curve
        .points
        .iter()
        .map(|p| format!("{:.3}", p.accuracy))
        .collect();
    writeln!(out, "  curve       {}", curve.join(" → "))?;

    let (lo, hi) = run.series.y_bounds();
    writeln!(
        out,
        "  series      {} points, y in [{lo:.2}, {hi:.2}]",
        run.series.len()
    )?;

    extras(out, &metrics.extras)
}

fn extras(out: &mut impl Write, extras: &Extras) -> io::Result<()> {
    match extras {
        Extras::FeatureImportance { features } => {
            writeln!(out, "  feature importance")?;
            for f in features {
                let bar = "█".repeat((f.weight * 40.0).round() as usize);
                writeln!(out, "    {:<10}{:.3} {bar}", f.feature, f.weight)?;
            }
        }
        Extras::ConfusionMatrix { labels, cells } => {
            writeln!(out, "  confusion matrix (rows: actual)")?;
            writeln!(
                out,
                "    {:<12}{:>11}{:>11}{:>11}",
                "", labels[0], labels[1], labels[2]
            )?;
            for (label, row) in labels.iter().zip(cells) {
                writeln!(
                    out,
                    "    {:<12}{:>11}{:>11}{:>11}",
                    label, row[0], row[1], row[2]
                )?;
            }
        }
        Extras::Coefficients { weights, intercept } => {
            writeln!(out, "  coefficients")?;
            for w in weights {
                writeln!(out, "    {:<6}{:+.3}", w.feature, w.weight)?;
            }
            writeln!(out, "    {:<6}{intercept:+.3}", "bias")?;
        }
        Extras::SupportVectors { count, margin } => {
            writeln!(out, "  support vectors {count}, margin {margin:.3}")?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RunReport<'a> {
    params: &'a HyperparameterSet,
    delay_ms: u64,
    #[serde(flatten)]
    run: &'a Run,
}

pub fn json(out: &mut impl Write, params: &HyperparameterSet, run: &Run) -> io::Result<()> {
    let report = RunReport {
        params,
        delay_ms: synthetic::training_delay(params).as_millis() as u64,
        run,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn format_value(value: ParamValue) -> String {
    match value {
        ParamValue::Number(v) => v.to_string(),
        ParamValue::Choice(c) => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthetic::{compute, Jitter};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_every_algorithm() {
        let text = render(|out| algorithms(out));
        for algorithm in Algorithm::ALL {
            assert!(text.contains(algorithm.id()));
        }
        assert!(text.contains("rmse"));
    }

    #[test]
    fn params_show_defaults_and_ranges() {
        let text = render(|out| params(out, &HyperparameterSet::defaults(Algorithm::Svm)));
        assert!(text.contains("kernel"));
        assert!(text.contains("linear | rbf | poly | sigmoid"));
        assert!(text.contains("rbf"));
    }

    #[test]
    fn text_report_of_default_xgboost() {
        let params = HyperparameterSet::defaults(Algorithm::XgBoost);
        let result = compute(&params, &mut Jitter::none());
        let text = render(|out| run(out, &params, &result));

        assert!(text.contains("accuracy    0.884"));
        assert!(text.contains("max_depth=3"));
        assert!(text.contains("feature importance"));
        assert!(text.contains("50 points"));
    }

    #[test]
    fn json_report_flattens_the_run() {
        let params = HyperparameterSet::defaults(Algorithm::Linear);
        let result = compute(&params, &mut Jitter::none());
        let text = render(|out| json(out, &params, &result));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["params"]["algorithm"], "linear");
        assert_eq!(value["metrics"]["primary"]["name"], "rmse");
        assert_eq!(value["metrics"]["extras"]["kind"], "coefficients");
        assert_eq!(value["series"]["points"].as_array().unwrap().len(), 50);
        assert!(value["delay_ms"].as_u64().unwrap() >= 1500);
    }
}
