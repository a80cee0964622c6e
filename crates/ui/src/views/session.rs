use crate::vm::{FeedbackVm, QuestionVm};

/// Question block: numbered heading, options in key order, and the
/// multi-select hint when more than one key is expected.
#[must_use]
pub fn render_question(question: &QuestionVm) -> String {
    let mut out = format!(
        "\nQuestion {} of {}\n{}\n",
        question.number, question.total, question.prompt
    );
    for row in &question.options {
        out.push_str(&format!("  {}. {}\n", row.key, row.text));
    }
    if question.multi_select {
        out.push_str("(select all that apply)\n");
    }
    out
}

/// Feedback block: verdict, the answer key when the selection was wrong,
/// and whatever explanations the correct keys carry.
#[must_use]
pub fn render_feedback(feedback: &FeedbackVm) -> String {
    let mut out = if feedback.correct {
        String::from("✅ Correct!\n")
    } else {
        format!(
            "❌ Incorrect. Correct answer(s): {}\n",
            feedback.correct_keys.join(", ")
        )
    };

    if !feedback.explanations.is_empty() {
        out.push_str("Why:\n");
        for explanation in &feedback.explanations {
            out.push_str(&format!(
                "  {}. {}: {}\n",
                explanation.key, explanation.option_text, explanation.text
            ));
        }
    }
    out
}
