//! Prompt builders for each feature.
//!
//! The assistant behavior is fixed by the pre-provisioned assistant
//! identifier; the prompt text is the only per-feature behavior driver.
//! Each builder embeds the configured content-source ("vector") identifier
//! where the feature reads from the uploaded corpus.

use crate::parse::quiz::AnsweredQuestion;

pub fn chat(question: &str, vector_store_id: &str) -> String {
    format!(
        "Search the file (vector id: {vector_store_id}) and provide a response to the following \
         question: \"{question}\". Please answer directly without referencing the file or vector ID."
    )
}

pub fn example(topic: &str, vector_store_id: &str) -> String {
    format!(
        "Please provide a step-by-step example for the topic: \"{topic}\". The example should be \
         clear and easy to follow. The example shall be step by step. use file search, vector id: \
         {vector_store_id}. generate new and different example on every run"
    )
}

pub fn flashcards(vector_store_id: &str) -> String {
    format!(
        "Generate multiple flashcards for all important concept in {vector_store_id}. The \
         flashcard shall be a keyword or important point of the topic to build first knowledge of \
         the topic. It shall be something for students to remember and build a first impression. \
         The response shall be in the format: \"keyword:definition\" or \"question:answer\"."
    )
}

pub fn summary(topic: &str) -> String {
    format!(
        "Please provide a concise and comprehensive summary of the topic: \"{topic}\". The \
         summary should cover the key points and provide a clear understanding of the subject."
    )
}

pub fn quiz(vector_store_id: &str) -> String {
    format!(
        r#"Please analyze the content from the file search (vector id: {vector_store_id}) and generate 5 multiple-choice questions about the content.
Each question should have 4 options (A, B, C, D) with one correct answer.
Format the response as a JSON array of questions.
Generate new and different questions on every run.
The response should be in this exact format:
{{
  "questions": [
    {{
      "question": "Question text here",
      "options": {{
        "A": "First option",
        "B": "Second option",
        "C": "Third option",
        "D": "Fourth option"
      }},
      "correctAnswer": "A"
    }}
  ]
}}"#
    )
}

/// Feedback prompt: one section per wrongly answered question, then the
/// four explanation fields the assistant is asked to produce for each.
pub fn feedback(wrong_answers: &[AnsweredQuestion]) -> String {
    let sections = wrong_answers
        .iter()
        .enumerate()
        .map(|(index, q)| {
            format!(
                "\n### Question {}:\nOriginal Question: {}\nStudent's Answer: {}\nCorrect Answer: {}\n",
                index + 1,
                q.question,
                q.option_text(&q.selected_answer),
                q.option_text(&q.correct_answer),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\nPlease provide detailed feedback for each wrong answer. Format your response with \
         clear sections for each question:\n\n{sections}\n\nFor each question, please provide:\n\
         1. **Why the correct answer is right**\n\
         2. **Why the chosen answer was incorrect**\n\
         3. **Step-by-step explanation**\n\
         4. **Tip for improvement**\n\n\
         Please maintain this structure for each question's feedback.\n"
    )
}
