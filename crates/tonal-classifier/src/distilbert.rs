use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::distilbert::{Config, DistilBertModel, DTYPE};
use serde::Deserialize;
use tokenizers::{Tokenizer, TruncationParams};

use crate::classifier::{Classification, Classifier};
use crate::error::ClassifierError;

pub const CONFIG_FILE: &str = "config.json";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const WEIGHTS_FILE: &str = "model.safetensors";

/// The parts of a Hugging Face `config.json` the classification head needs.
/// The encoder itself is configured from the same file via candle's
/// [`Config`].
#[derive(Debug, Deserialize)]
struct HeadConfig {
    dim: usize,
    max_position_embeddings: usize,
    id2label: BTreeMap<usize, String>,
}

/// A `DistilBertForSequenceClassification` model running on the CPU.
///
/// Immutable once loaded, so one instance serves all requests.
pub struct DistilBertClassifier {
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    device: Device,
}

impl DistilBertClassifier {
    /// Load from a directory containing `config.json`, `tokenizer.json` and
    /// `model.safetensors`.
    pub fn load(model_dir: &Path) -> Result<Self, ClassifierError> {
        let config_path = require_file(model_dir, CONFIG_FILE)?;
        let tokenizer_path = require_file(model_dir, TOKENIZER_FILE)?;
        let weights_path = require_file(model_dir, WEIGHTS_FILE)?;

        let raw_config = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&raw_config)?;
        let head: HeadConfig = serde_json::from_str(&raw_config)?;
        let labels = label_table(head.id2label)?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        tokenizer.with_padding(None);
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: head.max_position_embeddings,
                ..Default::default()
            }))
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        let device = Device::Cpu;
        // SAFETY: the weights file is memory-mapped read-only and must not be
        // modified while the model is alive.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, &device)? };

        let model = DistilBertModel::load(vb.pp("distilbert"), &config)?;
        let pre_classifier = candle_nn::linear(head.dim, head.dim, vb.pp("pre_classifier"))?;
        let classifier = candle_nn::linear(head.dim, labels.len(), vb.pp("classifier"))?;

        tracing::info!(
            model_dir = %model_dir.display(),
            labels = ?labels,
            "sentiment model loaded"
        );

        Ok(Self {
            model,
            pre_classifier,
            classifier,
            tokenizer,
            labels,
            device,
        })
    }

    /// Class probabilities for `text`, in label-id order.
    fn probabilities(&self, text: &str) -> Result<Vec<f32>, ClassifierError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        let ids = encoding.get_ids();

        let input_ids = Tensor::new(ids, &self.device)?.unsqueeze(0)?;
        // Nonzero entries are masked out; a single unpadded sequence attends
        // everywhere.
        let attention_mask = Tensor::zeros((ids.len(), ids.len()), DType::U8, &self.device)?;

        let hidden = self.model.forward(&input_ids, &attention_mask)?;
        let first_token = hidden.i((.., 0))?;
        let pooled = self.pre_classifier.forward(&first_token)?.relu()?;
        let logits = self.classifier.forward(&pooled)?;
        let probs = candle_nn::ops::softmax(&logits, D::Minus1)?;

        Ok(probs.squeeze(0)?.to_dtype(DType::F32)?.to_vec1::<f32>()?)
    }
}

impl Classifier for DistilBertClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let probs = self.probabilities(text)?;
        let (index, score) = probs
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| ClassifierError::Inference("model produced no scores".to_string()))?;
        let label = self
            .labels
            .get(index)
            .cloned()
            .ok_or_else(|| ClassifierError::Inference(format!("no label for class {index}")))?;

        tracing::debug!(%label, score, text_len = text.len(), "text classified");
        Ok(Classification {
            label,
            score: f64::from(score),
        })
    }
}

fn require_file(dir: &Path, name: &str) -> Result<PathBuf, ClassifierError> {
    let path = dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ClassifierError::MissingFile {
            path: path.display().to_string(),
        })
    }
}

/// Flatten `id2label` into a dense vector indexed by class id.
fn label_table(id2label: BTreeMap<usize, String>) -> Result<Vec<String>, ClassifierError> {
    if id2label.is_empty() {
        return Err(ClassifierError::Config("id2label is empty".to_string()));
    }
    id2label
        .into_iter()
        .enumerate()
        .map(|(expected, (id, label))| {
            if id == expected {
                Ok(label)
            } else {
                Err(ClassifierError::Config(format!(
                    "id2label is not contiguous: missing class {expected}"
                )))
            }
        })
        .collect()
}
