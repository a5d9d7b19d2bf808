// Tripay 命令行工具
// 用法:
//   tripay channels [CODE]      查询已启用的支付渠道
//   tripay fee AMOUNT [CODE]    计算手续费

use std::io;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;

use tripay::{Config, HttpTransport, MerchantService, PaymentMethod};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        })
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;

    let transport = HttpTransport::with_timeout(config.timeout())
        .context("Failed to create HTTP client")?;
    let merchant = MerchantService::with_transport(config.base_options(), Arc::new(transport));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("channels");

    info!(
        "Running {} against {} environment",
        command,
        if config.sandbox { "sandbox" } else { "production" }
    );

    let output = match command {
        "channels" => {
            let code = parse_code(args.get(1))?;
            let channels = merchant.payment_channel(code).await?;
            info!("Found {} payment channels", channels.len());
            serde_json::to_string_pretty(&channels)?
        }
        "fee" => {
            let amount: i64 = args
                .get(1)
                .context("Usage: tripay fee AMOUNT [CODE]")?
                .parse()
                .context("AMOUNT must be an integer")?;
            let code = parse_code(args.get(2))?;
            let fees = merchant.fee_calc(amount, code).await?;
            serde_json::to_string_pretty(&fees)?
        }
        other => anyhow::bail!("Unknown command {:?}, expected channels or fee", other),
    };

    println!("{}", output);
    Ok(())
}

/// 解析可选的渠道代码参数
fn parse_code(arg: Option<&String>) -> Result<Option<PaymentMethod>> {
    arg.map(|code| code.parse::<PaymentMethod>())
        .transpose()
        .map_err(anyhow::Error::from)
}
