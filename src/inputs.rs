//! Example payloads interpolated into snippets, one per task.

use crate::api::{ModelDescriptor, PipelineTask};
use crate::messages::{ChatMessage, ContentPart};

/// Returned by [`model_input_snippet`] for tasks without an example input.
pub const NO_INPUT_EXAMPLE: &str = "No input example has been defined for this model task.";

const DEFAULT_MASK_TOKEN: &str = "[MASK]";

const SAMPLE_IMAGE_URL: &str =
    "https://cdn.britannica.com/61/93061-050-99147DCE/Statue-of-Liberty-Island-New-York-Bay.jpg";

const SUMMARIZATION_INPUT: &str = "\"The tower is 324 metres (1,063 ft) tall, about the same height as an 81-storey building, and the tallest structure in Paris. Its base is square, measuring 125 metres (410 ft) on each side. During its construction, the Eiffel Tower surpassed the Washington Monument to become the tallest man-made structure in the world, a title it held for 41 years until the Chrysler Building in New York City was finished in 1930. It was the first structure to reach a height of 300 metres. Due to the addition of a broadcasting aerial at the top of the tower in 1957, it is now taller than the Chrysler Building by 5.2 metres (17 ft). Excluding transmitters, the Eiffel Tower is the second tallest free-standing structure in France after the Millau Viaduct.\"";

const TABLE_QUESTION_ANSWERING_INPUT: &str = r#"{
    "query": "How many stars does the transformers repository have?",
    "table": {
        "Repository": ["Transformers", "Datasets", "Tokenizers"],
        "Stars": ["36542", "4512", "3934"],
        "Contributors": ["651", "77", "34"],
        "Programming language": [
            "Python",
            "Python",
            "Rust, Python and NodeJS"
        ]
    }
}"#;

const QUESTION_ANSWERING_INPUT: &str = r#"{
    "question": "What is my name?",
    "context": "My name is Clara and I live in Berkeley."
}"#;

const SENTENCE_SIMILARITY_INPUT: &str = r#"{
    "source_sentence": "That is a happy person",
    "sentences": [
        "That is a happy dog",
        "That is a very happy person",
        "Today is a sunny day"
    ]
}"#;

const DOCUMENT_QUESTION_ANSWERING_INPUT: &str = r#"{
    "image": "cat.png",
    "question": "What is in this image?"
}"#;

const TABULAR_INPUT: &str =
    r#"'{"Height":[11.52,12.48],"Length1":[23.2,24.0],"Length2":[25.4,26.3],"Species": ["Bream","Bream"]}'"#;

/// The raw example input for the model's task, multi-line where the payload
/// is an object. `None` when the task has no example.
pub fn example_input(model: &ModelDescriptor) -> Option<String> {
    let input = match model.task()? {
        PipelineTask::Translation => "\"Меня зовут Вольфганг и я живу в Берлине\"".to_string(),
        PipelineTask::Summarization => SUMMARIZATION_INPUT.to_string(),
        PipelineTask::TableQuestionAnswering => TABLE_QUESTION_ANSWERING_INPUT.to_string(),
        PipelineTask::QuestionAnswering => QUESTION_ANSWERING_INPUT.to_string(),
        PipelineTask::TextClassification => "\"I like you. I love you\"".to_string(),
        PipelineTask::TokenClassification => {
            "\"My name is Sarah Jessica Parker but you can call me Jessica\"".to_string()
        }
        PipelineTask::TextGeneration => {
            "\"Can you please let us know more details about your \"".to_string()
        }
        PipelineTask::Text2TextGeneration => "\"The answer to the universe is\"".to_string(),
        PipelineTask::FillMask => format!(
            "\"The answer to the universe is {}.\"",
            model.mask_token.as_deref().unwrap_or(DEFAULT_MASK_TOKEN)
        ),
        PipelineTask::ZeroShotClassification => "\"Hi, I recently bought a device from your company but it is not working as advertised and I would like to get reimbursed!\"".to_string(),
        PipelineTask::SentenceSimilarity => SENTENCE_SIMILARITY_INPUT.to_string(),
        PipelineTask::FeatureExtraction => {
            "\"Today is a sunny day and I will get some ice cream.\"".to_string()
        }
        PipelineTask::ImageClassification
        | PipelineTask::ImageToText
        | PipelineTask::ObjectDetection
        | PipelineTask::ImageSegmentation
        | PipelineTask::ZeroShotImageClassification => "\"cats.jpg\"".to_string(),
        PipelineTask::AudioToAudio
        | PipelineTask::AudioClassification
        | PipelineTask::AutomaticSpeechRecognition => "\"sample1.flac\"".to_string(),
        PipelineTask::TextToImage => "\"Astronaut riding a horse\"".to_string(),
        PipelineTask::TextToSpeech => "\"The answer to the universe is 42\"".to_string(),
        PipelineTask::TextToAudio => {
            "\"liquid drum and bass, atmospheric synths, airy sounds\"".to_string()
        }
        PipelineTask::TabularRegression | PipelineTask::TabularClassification => {
            TABULAR_INPUT.to_string()
        }
        PipelineTask::DocumentQuestionAnswering => DOCUMENT_QUESTION_ANSWERING_INPUT.to_string(),
        // Chat payloads come from `example_messages`.
        PipelineTask::ImageTextToText => return None,
    };
    Some(input)
}

/// The example input for the model's task, formatted for embedding in a
/// snippet.
///
/// `no_wrap` collapses a multi-line input onto a single line; `no_quotes`
/// strips one pair of surrounding double quotes (for file names used as
/// shell arguments).
pub fn model_input_snippet(model: &ModelDescriptor, no_wrap: bool, no_quotes: bool) -> String {
    let Some(mut input) = example_input(model) else {
        return NO_INPUT_EXAMPLE.to_string();
    };
    if no_wrap {
        input = collapse_lines(&input);
    }
    if no_quotes {
        input = strip_quotes(&input).to_string();
    }
    input
}

/// The default chat used in conversational snippets.
pub fn example_messages(model: &ModelDescriptor) -> Vec<ChatMessage> {
    match model.task() {
        Some(PipelineTask::ImageTextToText) => vec![ChatMessage::user(vec![
            ContentPart::text("Describe this image in one sentence."),
            ContentPart::image_url(SAMPLE_IMAGE_URL),
        ])],
        _ => vec![ChatMessage::user("What is the capital of France?")],
    }
}

fn collapse_lines(input: &str) -> String {
    input
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_quotes(input: &str) -> &str {
    input
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .filter(|s| !s.is_empty())
        .unwrap_or(input)
}
