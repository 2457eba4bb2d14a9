//! Find the most similar pair of comments by embedding cosine similarity.

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

pub async fn most_similar_comments(state: &AppState) -> Result<String, TaskError> {
    let src = input_file(state, "comments.txt")?;
    let content = tokio::fs::read_to_string(&src).await?;

    let comments: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if comments.len() < 2 {
        return Err(TaskError::BadInput(
            "comments.txt needs at least two comments to compare".to_string(),
        ));
    }

    let embeddings = state.llm.embeddings(&comments).await?;
    let (first, second, score) = best_pair(&embeddings);

    let dst = sandbox::resolve(&state.config.data_dir, "comments-similar.txt")?;
    tokio::fs::write(&dst, format!("{}\n{}", comments[first], comments[second])).await?;

    Ok(format!(
        "Most similar comment pair written to comments-similar.txt (cosine similarity {score:.4})"
    ))
}

/// Pairwise scan for the indices with maximal cosine similarity. Indices are
/// returned in input order.
fn best_pair(embeddings: &[Vec<f32>]) -> (usize, usize, f32) {
    let mut best = (0, 1, f32::MIN);
    for i in 0..embeddings.len() {
        for j in (i + 1)..embeddings.len() {
            let score = cosine_similarity(&embeddings[i], &embeddings[j]);
            if score > best.2 {
                best = (i, j, score);
            }
        }
    }
    best
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
