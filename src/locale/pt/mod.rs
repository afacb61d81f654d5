//! 葡萄牙语反向规范化（ITN）：口语 -> 书写
//!
//! "menos um vírgula dois seis" -> "-1,26"，"dois reais e cinquenta centavos" -> "R$ 2,50"

pub mod taggers;
pub mod verbalizers;
