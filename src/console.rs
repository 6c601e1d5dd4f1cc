//! 控制台交互循环
//!
//! 每轮读取一行用户输入：exit / quit 结束会话并打印处理总数，
//! status 打印历史条数与 token 用量，其余作为查询交给 Agent。
//! Ctrl-C 随时中断。任何一轮的失败都由 Agent 内部收敛，循环不会因此退出。

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::agent::ResearchAgent;

const SEPARATOR_WIDTH: usize = 60;

fn print_banner() {
    let line = "=".repeat(SEPARATOR_WIDTH);
    println!("{line}");
    println!("Sage 科研助手");
    println!("{line}");
    println!("功能：1.文献综述 2.代码分析 3.研究计划 4.学术问答");
    println!("输入 'exit' 退出，'status' 查看状态");
    println!("{line}");
}

/// 运行交互主循环，直到 exit / quit、EOF 或 Ctrl-C
pub async fn run(agent: &mut ResearchAgent) -> anyhow::Result<()> {
    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n您的问题：");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\n程序中断。");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            // EOF（管道输入结束）
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("\n会话结束。共处理 {} 个问题。", agent.history().len());
            break;
        }
        if input == "status" {
            let (prompt, completion, total) = agent.token_usage();
            println!(
                "系统正常 | 历史问题数：{} | token 用量：{prompt}+{completion}={total}",
                agent.history().len()
            );
            continue;
        }

        let outcome = agent.process(input).await;

        println!("\n【回答】({}秒)：", outcome.time_cost);
        println!("{}", "-".repeat(50));
        println!("{}", outcome.response);
        println!("{}", "-".repeat(50));
        if !outcome.tools_used.is_empty() {
            println!("使用工具：{}", outcome.tools_used.join(", "));
        }
    }

    Ok(())
}
