//! Token-window chunking of document text for summarization.
//!
//! Long documents do not fit in one model request, so the text is cut into consecutive windows
//! of at most `max_tokens` tokens, measured with the model's own BPE encoding.

use tiktoken_rs::{get_bpe_from_model, o200k_base, CoreBPE};

use super::*;

/// Default chunk size in tokens.
pub const DEFAULT_CHUNK_TOKENS: usize = 1200;

/// Tokens a chunk boundary may be pushed forward to avoid splitting a multi-byte character.
const BOUNDARY_SLACK: usize = 4;

/// A window of document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
  /// Position of the chunk in the document, from zero
  pub index:       usize,
  /// Decoded chunk text
  pub text:        String,
  /// Number of tokens in the chunk
  pub token_count: usize,
}

/// Loads the BPE encoding for `model`, falling back to `o200k_base` for unknown models.
fn encoding_for(model: &str) -> Result<CoreBPE> {
  match get_bpe_from_model(model) {
    Ok(bpe) => Ok(bpe),
    Err(_) => {
      warn!("No tokenizer known for model {}, using o200k_base", model);
      o200k_base().map_err(|e| StudygenError::Tokenizer(e.to_string()))
    },
  }
}

/// Splits `text` into consecutive chunks of at most `max_tokens` tokens.
///
/// Chunks cover the text in order with no overlap. A boundary that would split a multi-byte
/// character is moved forward by a few tokens, so a chunk can slightly exceed `max_tokens`.
/// Empty text yields no chunks.
///
/// # Errors
///
/// Returns [`StudygenError::Tokenizer`] if the encoding cannot be loaded or a chunk cannot be
/// decoded, and [`StudygenError::Config`] when `max_tokens` is zero.
pub fn chunk_text(text: &str, model: &str, max_tokens: usize) -> Result<Vec<Chunk>> {
  if max_tokens == 0 {
    return Err(StudygenError::Config("Chunk size must be greater than zero".to_string()));
  }

  let bpe = encoding_for(model)?;
  let tokens = bpe.encode_ordinary(text);

  let mut chunks = Vec::new();
  let mut start = 0;
  while start < tokens.len() {
    let mut end = (start + max_tokens).min(tokens.len());
    let decoded = loop {
      match bpe.decode(tokens[start..end].to_vec()) {
        Ok(decoded) => break decoded,
        Err(_) if end < tokens.len() && end < start + max_tokens + BOUNDARY_SLACK => end += 1,
        Err(e) => return Err(StudygenError::Tokenizer(e.to_string())),
      }
    };
    chunks.push(Chunk { index: chunks.len(), text: decoded, token_count: end - start });
    start = end;
  }

  debug!("Split {} tokens into {} chunks", tokens.len(), chunks.len());
  Ok(chunks)
}
