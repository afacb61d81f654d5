// src/config.rs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::locale;

// ============================================================================
// 规范化方向
// ============================================================================

/// 规范化方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// 书写 -> 口语（"5 руб." -> "пять рублей"）
    Tn,
    /// 口语 -> 书写（"dois reais" -> "R$ 2"）
    #[default]
    Itn,
}

// ============================================================================
// 规范化器配置
// ============================================================================

fn default_lang() -> String {
    "pt".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_candidates() -> usize {
    5
}

/// 规范化器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// 语言代码，例如 "pt"、"ru"
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub mode: NormalizationMode,
    /// true: 只取最优结果；false: 保留带权候选
    #[serde(default = "default_true")]
    pub deterministic: bool,
    /// 外部词表目录 `<dir>/<lang>/...`，为空时使用内置词表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// 替换语言自带白名单的 TSV 文件
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<PathBuf>,
    /// `normalize_candidates` 的默认候选数
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// 构建后用已知样例自检
    #[serde(default = "default_true")]
    pub verify_on_build: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            mode: NormalizationMode::default(),
            deterministic: true,
            data_dir: None,
            whitelist: None,
            max_candidates: default_max_candidates(),
            verify_on_build: true,
        }
    }
}

impl NormalizerConfig {
    pub fn new(lang: &str, mode: NormalizationMode) -> Self {
        Self {
            lang: lang.to_string(),
            mode,
            ..Self::default()
        }
    }

    /// 默认配置文件位置：`<config_dir>/TextNorm/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("TextNorm").join("config.json"))
    }

    /// 检查语言/方向组合与数值范围
    pub fn validate(&self) -> Result<()> {
        if !locale::is_supported(&self.lang, self.mode) {
            bail!(
                "不支持的语言/模式组合: {} / {:?}",
                self.lang,
                self.mode
            );
        }
        if self.max_candidates == 0 {
            bail!("max_candidates 必须大于 0");
        }
        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                bail!("数据目录不存在: {:?}", dir);
            }
        }
        Ok(())
    }

    /// 读取配置，文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::warn!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;
        tracing::info!(
            "配置已加载: lang={} mode={:?} deterministic={}",
            config.lang,
            config.mode,
            config.deterministic
        );
        Ok(config)
    }

    /// 原子写入：先写临时文件，再替换
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = path.with_extension("json.tmp");
        let backup_path = path.with_extension("json.bak");

        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        // 目标存在时先备份，重命名失败可以恢复
        if path.exists() {
            if backup_path.exists() {
                let _ = std::fs::remove_file(&backup_path);
            }
            std::fs::rename(path, &backup_path).map_err(|e| {
                tracing::error!("备份旧配置文件失败: {}", e);
                e
            })?;
        }

        match std::fs::rename(&temp_path, path) {
            Ok(_) => {
                let _ = std::fs::remove_file(&backup_path);
                tracing::info!("配置保存成功");
                Ok(())
            }
            Err(e) => {
                tracing::error!("重命名临时文件失败: {}", e);
                if backup_path.exists() {
                    if let Err(restore_err) = std::fs::rename(&backup_path, path) {
                        tracing::error!("恢复备份失败: {}", restore_err);
                    } else {
                        tracing::info!("已从备份恢复配置");
                    }
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NormalizerConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.lang, "pt");
        assert_eq!(config.mode, NormalizationMode::Itn);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = NormalizerConfig::new("ru", NormalizationMode::Tn);
        config.deterministic = false;
        config.max_candidates = 3;
        config.save(&path).unwrap();
        // 第二次保存走备份/替换路径
        config.save(&path).unwrap();

        assert_eq!(NormalizerConfig::load(&path).unwrap(), config);
        assert!(!path.with_extension("json.tmp").exists());
        assert!(!path.with_extension("json.bak").exists());
    }

    #[test]
    fn test_partial_json_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "lang": "ru", "mode": "tn" }"#).unwrap();

        let config = NormalizerConfig::load(&path).unwrap();
        assert_eq!(config.mode, NormalizationMode::Tn);
        assert!(config.deterministic);
        assert!(config.verify_on_build);
        assert_eq!(config.max_candidates, 5);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ lang: ").unwrap();
        assert!(NormalizerConfig::load(&path).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(NormalizerConfig::default().validate().is_ok());
        assert!(NormalizerConfig::new("ru", NormalizationMode::Itn)
            .validate()
            .is_err());

        let mut config = NormalizerConfig::default();
        config.max_candidates = 0;
        assert!(config.validate().is_err());

        let mut config = NormalizerConfig::default();
        config.data_dir = Some(PathBuf::from("/nonexistent/text-norm-data"));
        assert!(config.validate().is_err());
    }
}
