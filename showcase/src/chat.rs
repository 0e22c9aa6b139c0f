use std::{fs, path::Path};

use crate::error::{Result, ShowcaseErr};

/// Upload limit used when the config does not set one.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "md"];
const MAX_ANSWER_SENTENCES: usize = 3;
const SUMMARY_SENTENCES: usize = 2;
const MIN_KEYWORD_LEN: usize = 3;

const GREETINGS: [&str; 6] = ["hi", "hello", "hey", "hiya", "greetings", "howdy"];
const SUMMARY_WORDS: [&str; 5] = ["summary", "summarize", "summarise", "overview", "tldr"];
const STOP_WORDS: [&str; 48] = [
    "the", "and", "for", "are", "but", "not", "you", "your", "all", "any", "can", "had", "has",
    "have", "her", "his", "how", "its", "our", "out", "was", "were", "what", "when", "where",
    "which", "who", "why", "will", "with", "this", "that", "these", "those", "from", "about",
    "into", "does", "did", "there", "their", "they", "them", "then", "than", "tell", "please",
    "document",
];

/// A plain text document the user uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    text: String,
    sentences: Vec<String>,
}

impl Document {
    /// Reads and validates a document from disk.
    ///
    /// # Arguments
    /// * `path` - The file to read, must be a `.txt` or `.md` file.
    /// * `max_bytes` - The largest accepted file size.
    ///
    /// # Returns
    /// The document, or the reason it was rejected.
    pub fn load(path: &Path, max_bytes: u64) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ShowcaseErr::UnsupportedFileType(ext));
        }

        let size = fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(ShowcaseErr::UploadTooLarge {
                size,
                max: max_bytes,
            });
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| ShowcaseErr::NotUtf8)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::from_text(name, text)
    }

    /// Wraps text that is already in memory.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ShowcaseErr::EmptyDocument);
        }

        let sentences = split_sentences(&text);
        Ok(Self {
            name: name.into(),
            text,
            sentences,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// A keyword matching chat over a single uploaded document.
#[derive(Debug, Clone)]
pub struct DocumentChat {
    document: Option<Document>,
    history: Vec<ChatMessage>,
    max_upload_bytes: u64,
}

impl Default for DocumentChat {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl DocumentChat {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self {
            document: None,
            history: Vec::new(),
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Loads `path` as the document to chat about. A rejected file leaves
    /// the current document and history untouched.
    pub fn load(&mut self, path: &Path) -> Result<&Document> {
        match Document::load(path, self.max_upload_bytes) {
            Ok(document) => Ok(self.attach(document)),
            Err(e) => {
                log::warn!("rejected upload {}: {e}", path.display());
                Err(e)
            }
        }
    }

    /// Replaces the document and starts a fresh conversation.
    pub fn attach(&mut self, document: Document) -> &Document {
        log::info!(
            name = document.name(),
            words = document.word_count();
            "document loaded"
        );
        self.history.clear();
        self.document.insert(document)
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Answers `question` and records both sides in the history.
    pub fn ask(&mut self, question: &str) -> &str {
        let reply = answer(self.document.as_ref(), question);
        self.history.push(ChatMessage {
            speaker: Speaker::User,
            text: question.trim().to_string(),
        });
        self.history.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: reply,
        });

        match self.history.last() {
            Some(message) => &message.text,
            None => "",
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Builds the reply to `question`.
pub fn answer(document: Option<&Document>, question: &str) -> String {
    let Some(document) = document else {
        return "Upload a .txt or .md file first, then ask me about it.".to_string();
    };

    let words = tokenize(question);
    if words.is_empty() {
        return format!("Ask me something about {}.", document.name());
    }

    if words.iter().all(|w| GREETINGS.contains(&w.as_str())) {
        return format!(
            "Hello! I've read {} ({} words). Ask me anything about it.",
            document.name(),
            document.word_count()
        );
    }

    if words.iter().any(|w| SUMMARY_WORDS.contains(&w.as_str())) {
        let opening: Vec<&str> = document
            .sentences()
            .iter()
            .take(SUMMARY_SENTENCES)
            .map(String::as_str)
            .collect();
        return format!("Here's a quick summary: {}", opening.join(" "));
    }

    let keywords = keywords(&words);
    if keywords.is_empty() {
        return "Could you be more specific? Try asking with a few key terms.".to_string();
    }

    let best = best_sentences(document.sentences(), &keywords);
    if best.is_empty() {
        return format!(
            "I couldn't find anything about \"{}\" in {}.",
            keywords.join(" "),
            document.name()
        );
    }

    format!("Based on the document: {}", best.join(" "))
}

/// Lowercased alphanumeric words.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Drops stop words, short tokens and duplicates.
fn keywords(words: &[String]) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in words {
        let meaningful =
            word.chars().count() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(&word.as_str());
        if meaningful && !keywords.contains(word) {
            keywords.push(word.clone());
        }
    }
    keywords
}

/// The highest scoring sentences, in the order they appear in the document.
fn best_sentences<'a>(sentences: &'a [String], keywords: &[String]) -> Vec<&'a str> {
    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let lower = s.to_lowercase();
            let hits = keywords.iter().filter(|k| lower.contains(k.as_str())).count();
            (i, hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .collect();

    // stable, so ties keep document order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_ANSWER_SENTENCES);
    scored.sort_by_key(|(i, _)| *i);

    scored.into_iter().map(|(i, _)| sentences[i].as_str()).collect()
}

/// Splits on sentence punctuation followed by whitespace and on blank lines,
/// keeping the punctuation.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let sentence = current.split_whitespace().collect::<Vec<_>>().join(" ");
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        current.clear();
    };

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut current);
            continue;
        }
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            current.push(c);
            let at_boundary = chars.peek().is_none_or(|n| n.is_whitespace());
            if matches!(c, '.' | '!' | '?') && at_boundary {
                flush(&mut current);
            }
        }
        current.push(' ');
    }
    flush(&mut current);

    sentences
}
