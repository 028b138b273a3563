//! AI 투자주치의 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 대시보드 (분석 서비스에 닿지 못하면 데모 데이터)
//! coach dashboard
//!
//! # 다른 서버, 데모 대체 없이
//! coach --api-url http://analytics:8000/api/v1 --strict analysis
//!
//! # 리밸런싱 제안 포함 포트폴리오
//! coach portfolio --rebalance
//!
//! # 조회한 레코드를 JSON으로
//! coach --json leaderboard
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use coach_client::AnalyticsClient;
use coach_core::{init_logging, AppConfig, ChartSource, LogConfig};
use coach_dashboard::commands::{
    analysis::show_analysis,
    dashboard::show_dashboard,
    gamification::{show_gamification, show_leaderboard},
    portfolio::show_portfolio,
    routes::show_routes,
    CommandContext,
};

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "AI 투자주치의 - 투자 행동 분석 대시보드", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (기본: config/default.toml, 없으면 기본값)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 분석 서비스 기본 URL (COACH_API_URL보다 우선)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// 데모 데이터 대체를 끄고 실패를 그대로 표시
    #[arg(long, global = true)]
    strict: bool,

    /// 행동 추이 차트 데이터 출처 (illustrative, snapshot)
    #[arg(long, global = true)]
    chart: Option<ChartSource>,

    /// 텍스트 화면 대신 조회한 레코드를 JSON으로 출력
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 대시보드: 주요 지표, 오늘의 AI 코칭, 추천 행동
    Dashboard {
        /// 사용자 ID (기본: 설정의 dashboard.user_id)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// 상세분석: 행동/리스크 지표, 섹터 비중, 시장 평균 비교
    Analysis {
        /// 사용자 ID
        #[arg(short, long)]
        user: Option<String>,
    },

    /// 포트폴리오: 보유 종목과 리밸런싱 제안
    Portfolio {
        /// 사용자 ID
        #[arg(short, long)]
        user: Option<String>,

        /// 리밸런싱 계획도 요청
        #[arg(long, default_value = "false")]
        rebalance: bool,
    },

    /// 게이미피케이션 현황 (레벨, 배지, 연속 기록)
    Gamification {
        /// 사용자 ID
        #[arg(short, long)]
        user: Option<String>,
    },

    /// 주간 리더보드
    Leaderboard,

    /// 내비게이션 경로 보기
    Routes {
        /// 현재 경로
        #[arg(short, long, default_value = "/")]
        path: String,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if cli.strict {
        config.api.demo_mode = false;
    }
    if let Some(chart) = cli.chart {
        config.dashboard.chart_source = chart;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(LogConfig::from(&config.logging)).context("Failed to initialize logging")?;
    let client = AnalyticsClient::from_config(&config.api).context("Failed to create API client")?;
    info!(
        base_url = %config.api.base_url,
        demo_mode = client.policy().is_demo(),
        "coach 시작"
    );

    let ctx = CommandContext::new(client, &config).with_json(cli.json);

    let output = match &cli.command {
        Commands::Dashboard { user } => show_dashboard(&ctx, user.as_deref()).await,
        Commands::Analysis { user } => show_analysis(&ctx, user.as_deref()).await,
        Commands::Portfolio { user, rebalance } => {
            show_portfolio(&ctx, user.as_deref(), *rebalance).await
        }
        Commands::Gamification { user } => show_gamification(&ctx, user.as_deref()).await,
        Commands::Leaderboard => show_leaderboard(&ctx).await,
        Commands::Routes { path } => Ok(show_routes(path)),
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            Err(e)
        }
    }
}
