use crate::vm::ResultsVm;

/// Results block: score line, pass verdict at the 60% bar, and how long
/// the run took.
#[must_use]
pub fn render_results(results: &ResultsVm) -> String {
    let verdict = if results.passed {
        "Passed. Nice work!"
    } else {
        "Not passed. 60% is the bar; try the unit again."
    };

    format!(
        "\n{} of {} correct ({}%)\n{}\nTime: {}\n",
        results.score, results.total, results.percentage, verdict, results.duration_str
    )
}
