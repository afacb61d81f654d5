//! 各语言的语法组装
//!
//! 每种语言按"叶子优先"的顺序构建标注器，再组合成一个标注并集与一个渲染并集。

pub mod pt;
pub mod ru;

use std::time::Instant;

use anyhow::{bail, Context, Result};

use crate::config::NormalizationMode;
use crate::data::GrammarData;
use crate::fst::Weight;
use crate::grammar::{Grammar, GraphFst};

/// 白名单优先于所有类别
pub const WHITELIST_WEIGHT: Weight = 1.01;
/// 日期、小数优先于基数词等通用类别
pub const PREFERRED_WEIGHT: Weight = 1.09;
pub const CLASS_WEIGHT: Weight = 1.1;

/// 一种语言的完整语法对
#[derive(Debug, Clone)]
pub struct LocaleGrammars {
    pub classify: GraphFst,
    pub verbalize: GraphFst,
}

/// 支持的语言/方向组合
pub const SUPPORTED: &[(&str, NormalizationMode)] = &[
    ("pt", NormalizationMode::Itn),
    ("ru", NormalizationMode::Tn),
];

pub fn is_supported(lang: &str, mode: NormalizationMode) -> bool {
    SUPPORTED.iter().any(|(l, m)| *l == lang && *m == mode)
}

/// 构建语言语法；不支持的组合直接报错，不会返回半成品
pub fn build(
    lang: &str,
    mode: NormalizationMode,
    data: &mut GrammarData,
    deterministic: bool,
) -> Result<LocaleGrammars> {
    let start = Instant::now();
    let grammars = match (lang, mode) {
        ("pt", NormalizationMode::Itn) => {
            let classify = pt::taggers::ClassifyFst::new(data, deterministic)?;
            let verbalize = pt::verbalizers::VerbalizeFst::new(deterministic);
            LocaleGrammars {
                classify: classify.graph_fst().clone(),
                verbalize: verbalize.graph_fst().clone(),
            }
        }
        ("ru", NormalizationMode::Tn) => {
            let classify = ru::taggers::ClassifyFst::new(data, deterministic)?;
            let verbalize = ru::verbalizers::VerbalizeFst::new(data, deterministic)?;
            LocaleGrammars {
                classify: classify.graph_fst().clone(),
                verbalize: verbalize.graph_fst().clone(),
            }
        }
        _ => bail!("不支持的语言/模式组合: {} / {:?}", lang, mode),
    };

    tracing::info!(
        "{} 语法构建完成 ({:?}, {} 个词表, 耗时 {:?})",
        lang,
        mode,
        data.loaded(),
        start.elapsed()
    );
    Ok(grammars)
}

/// 构建后自检：每种语言几条已知输入必须得到预期输出
pub fn self_check(lang: &str, grammars: &LocaleGrammars) -> Result<()> {
    let samples: &[(&str, &str)] = match lang {
        "pt" => &[
            ("dois reais", "R$ 2"),
            ("menos um vírgula dois seis", "-1,26"),
            ("vinte e três", "23"),
        ],
        "ru" => &[("5 руб.", "пять рублей"), ("-12", "минус двенадцать")],
        _ => &[],
    };

    for (input, expected) in samples {
        let token = grammars
            .classify
            .fst()
            .best(input)
            .with_context(|| format!("自检失败: {:?} 无法标注", input))?;
        let rendered = grammars
            .verbalize
            .fst()
            .best(&token.output)
            .with_context(|| format!("自检失败: 词元 {:?} 无法渲染", token.output))?;
        if rendered.output != *expected {
            bail!(
                "自检失败: {:?} -> {:?}，期望 {:?}",
                input,
                rendered.output,
                expected
            );
        }
    }
    tracing::debug!("{} 自检通过 ({} 条)", lang, samples.len());
    Ok(())
}

/// 带耗时日志的单个语法构建
pub(crate) fn timed<T>(name: &str, build: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let built = build().with_context(|| format!("构建 {} 语法失败", name))?;
    tracing::debug!("{} 构建耗时 {:?}", name, start.elapsed());
    Ok(built)
}
