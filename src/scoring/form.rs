use super::weights;
use crate::types::answers::{Answer, Category, FormAnswers};
use crate::types::scoring::{Score, MAX_SCORE};

/// Weight a single answer contributes. Multi-select answers take their best value.
pub fn answer_weight(category: Category, answer: &Answer) -> u8 {
    answer
        .values()
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| weights::weight(category, value))
        .max()
        .unwrap_or(0)
}

/// Average weight of the answered categories, rescaled from 0-10 to 0-100.
pub fn compute_form_score(answers: &FormAnswers) -> Score {
    let (sum, answered) = answers
        .answered()
        .fold((0u32, 0u32), |(sum, answered), (category, answer)| {
            (sum + u32::from(answer_weight(category, answer)), answered + 1)
        });
    if answered == 0 {
        return 0;
    }

    // round(sum * 10 / answered), half up, in integers
    let scaled = (sum * 20 + answered) / (answered * 2);
    scaled.min(u32::from(MAX_SCORE)) as Score
}
