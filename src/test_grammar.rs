// 语法调试工具 - 逐行读取标准输入，打印词元与规范化结果
use anyhow::Result;
use std::io::BufRead;
use std::path::PathBuf;

use text_norm_lib::{Normalizer, NormalizerConfig};

fn main() -> Result<()> {
    // 初始化日志
    text_norm_lib::init_tracing();

    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => NormalizerConfig::default_path()?,
    };
    let config = NormalizerConfig::load(&path)?;

    println!("=== 语法调试工具 ({} / {:?}) ===\n", config.lang, config.mode);
    let normalizer = Normalizer::new(&config)?;
    println!("✓ 数据指纹: {}\n", normalizer.fingerprint());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        for span in normalizer.tag(&line)? {
            println!("  [{}..{}] {:?} -> {}", span.start, span.end, span.original, span.token);
        }

        if config.deterministic {
            let result = normalizer.normalize(&line);
            println!("{} ({} µs)", result.text, result.elapsed_us);
        } else {
            for candidate in normalizer.normalize_candidates(&line, config.max_candidates) {
                println!("{:>8.2}  {}", candidate.weight, candidate.text);
            }
        }
    }

    Ok(())
}
