//! 데모 데이터.
//!
//! 분석 서비스에 닿지 못할 때 화면을 채우는 고정 응답입니다. 시각 필드만
//! 값을 만드는 순간의 시각으로 찍습니다.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use coach_core::{
    ActionCategory, AnalysisReport, Badge, BehaviorAnalysis, CoachingAction, CurrentAllocation,
    CurrentLevel, EstimatedCost, GamificationStatus, GamificationSummary, Leaderboard,
    LeaderboardEntry, LevelProgress, MarketComparison, NextLevel, OrderedMap, PortfolioHolding,
    PortfolioSnapshot, Priority, RebalancingPlan, RequiredTrade, TargetAllocation, TradeAction,
    DEFAULT_USER_ID,
};

/// 다음 점검까지의 기간 (일).
const REVIEW_INTERVAL_DAYS: i64 = 7;

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 데모 응답 묶음.
///
/// 분석 리포트, 포트폴리오, 리밸런싱 계획은 데모 사용자 기준으로 고정되어
/// 있고, 게이미피케이션 현황만 요청한 사용자 ID를 그대로 씁니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFixture {
    demo_user_id: String,
}

impl Default for DemoFixture {
    fn default() -> Self {
        Self {
            demo_user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl DemoFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// 고정 응답에 찍히는 데모 사용자 ID.
    pub fn demo_user_id(&self) -> &str {
        &self.demo_user_id
    }

    // ========================================================================
    // 분석 리포트
    // ========================================================================

    /// 현재 시각 기준 데모 분석 리포트.
    pub fn analysis(&self) -> AnalysisReport {
        self.analysis_at(Utc::now())
    }

    /// `now` 기준 데모 분석 리포트. 다음 점검일은 7일 뒤입니다.
    pub fn analysis_at(&self, now: DateTime<Utc>) -> AnalysisReport {
        let stamped = iso(now);

        AnalysisReport {
            report_id: "demo-001".to_string(),
            user_id: self.demo_user_id.clone(),
            analysis_date: stamped.clone(),
            behavior_analysis: self.behavior(stamped),
            investor_types: vec!["단타형".to_string(), "FOMO 취약형".to_string()],
            behavior_summary: "평균 보유기간이 5.9일로 너무 짧아요. 단기 매매보다는 기업의 가치를 보고 투자하는 연습을 해보세요. 최소 1주일은 보유하는 것을 목표로 시작해보면 어떨까요? 📈".to_string(),
            coaching_actions: Self::coaching_actions(),
            rebalancing_plan: None,
            gamification: GamificationSummary {
                level: Some(Self::level()),
                points: 1500,
                new_badges: Vec::new(),
            },
            market_comparison: MarketComparison {
                your_metrics: [
                    ("avg_holding_period", 5.9),
                    ("turnover_rate", 45.2),
                    ("win_rate", 42.3),
                ]
                .into_iter()
                .collect(),
                market_average: [
                    ("avg_holding_period", 5.9),
                    ("monthly_turnover", 45.2),
                    ("win_rate", 42.3),
                ]
                .into_iter()
                .collect(),
            },
            improvement_goals: OrderedMap::new(),
            next_review_date: iso(now + Duration::days(REVIEW_INTERVAL_DAYS)),
        }
    }

    fn behavior(&self, analysis_date: String) -> BehaviorAnalysis {
        BehaviorAnalysis {
            user_id: self.demo_user_id.clone(),
            analysis_date,
            avg_holding_period: 5.9,
            turnover_rate: 45.2,
            win_loss_ratio: 0.82,
            win_rate: 42.3,
            loss_delay_rate: 0.32,
            fomo_purchase_count: 12,
            portfolio_volatility: 18.5,
            sector_concentration: [
                ("IT", 0.65),
                ("금융", 0.15),
                ("화학", 0.10),
                ("바이오", 0.05),
                ("소비재", 0.05),
            ]
            .into_iter()
            .collect(),
            total_trades: 156,
            avg_trade_size: dec!(1500000),
            max_drawdown: 23.5,
            cash_ratio: 0.05,
        }
    }

    fn coaching_actions() -> Vec<CoachingAction> {
        vec![
            CoachingAction {
                action_id: "R-001_demo".to_string(),
                category: ActionCategory::Warning,
                priority: Priority::High,
                title: "과도한 회전율 경고".to_string(),
                description: "회전율이 45%로 너무 높습니다. 잠시 숨을 고르세요.".to_string(),
                recommendation: [
                    ("cash_ratio", json!(0.2)),
                    ("trading_suspension_days", json!(3)),
                ]
                .into_iter()
                .collect(),
                expected_impact: [("turnover_reduction", -30.0)].into_iter().collect(),
            },
            CoachingAction {
                action_id: "R-002_demo".to_string(),
                category: ActionCategory::GoalSetting,
                priority: Priority::High,
                title: "단타 패턴 개선".to_string(),
                description: "평균 보유기간이 5.9일로 너무 짧습니다.".to_string(),
                recommendation: [("min_holding_days", json!(7))].into_iter().collect(),
                expected_impact: [("holding_period_increase", 50.0)].into_iter().collect(),
            },
            CoachingAction {
                action_id: "R-003_demo".to_string(),
                category: ActionCategory::HabitCorrection,
                priority: Priority::Medium,
                title: "FOMO 매수 억제".to_string(),
                description: "급등 후 매수가 12회 발생했습니다.".to_string(),
                recommendation: [("cooling_period", json!(24))].into_iter().collect(),
                expected_impact: [("fomo_reduction", -50.0)].into_iter().collect(),
            },
        ]
    }

    fn level() -> LevelProgress {
        LevelProgress {
            current: CurrentLevel {
                level: 2,
                title: "투자 수련생".to_string(),
                min_points: 1000,
            },
            next: Some(NextLevel {
                level: 3,
                title: "투자 중급자".to_string(),
                required_points: 3000,
            }),
            progress: 25.0,
        }
    }

    // ========================================================================
    // 포트폴리오
    // ========================================================================

    /// 현재 시각 기준 데모 포트폴리오.
    pub fn portfolio(&self) -> PortfolioSnapshot {
        self.portfolio_at(Utc::now())
    }

    pub fn portfolio_at(&self, now: DateTime<Utc>) -> PortfolioSnapshot {
        let holding = |code: &str, name: &str, shares: u64, avg: Decimal, current: Decimal, value: Decimal| {
            PortfolioHolding {
                stock_code: code.to_string(),
                stock_name: name.to_string(),
                sector: "IT".to_string(),
                shares,
                avg_price: avg,
                current_price: current,
                value,
            }
        };

        PortfolioSnapshot {
            user_id: self.demo_user_id.clone(),
            portfolio: vec![
                holding("A005930", "삼성전자", 50, dec!(70000), dec!(72000), dec!(3600000)),
                holding("A035720", "카카오", 60, dec!(42000), dec!(41000), dec!(2460000)),
                holding("A000660", "SK하이닉스", 20, dec!(130000), dec!(135000), dec!(2700000)),
            ],
            total_value: dec!(8760000),
            last_updated: iso(now),
        }
    }

    // ========================================================================
    // 리밸런싱 계획
    // ========================================================================

    /// 현재 시각 기준 데모 리밸런싱 계획.
    pub fn rebalancing_plan(&self) -> RebalancingPlan {
        self.rebalancing_plan_at(Utc::now())
    }

    pub fn rebalancing_plan_at(&self, now: DateTime<Utc>) -> RebalancingPlan {
        let current = |name: &str, weight: f64, value: Decimal| CurrentAllocation {
            name: name.to_string(),
            sector: "IT".to_string(),
            weight,
            value,
        };
        let target = |name: &str, sector: &str, target_weight: f64| TargetAllocation {
            name: name.to_string(),
            sector: sector.to_string(),
            target_weight,
        };

        RebalancingPlan {
            plan_id: "demo-plan-001".to_string(),
            created_at: iso(now),
            current_portfolio: [
                ("A005930", current("삼성전자", 0.41, dec!(3600000))),
                ("A035720", current("카카오", 0.28, dec!(2460000))),
                ("A000660", current("SK하이닉스", 0.31, dec!(2700000))),
            ]
            .into_iter()
            .collect(),
            target_portfolio: [
                ("A005930", target("삼성전자", "IT", 0.15)),
                ("A035720", target("카카오", "IT", 0.10)),
                ("A105560", target("KB금융", "금융", 0.15)),
            ]
            .into_iter()
            .collect(),
            required_trades: vec![
                RequiredTrade {
                    stock_code: "A000660".to_string(),
                    stock_name: "SK하이닉스".to_string(),
                    action: TradeAction::Sell,
                    shares: 15,
                    trade_value: dec!(2025000),
                    reason: "IT 섹터 과다 집중 해소".to_string(),
                },
                RequiredTrade {
                    stock_code: "A105560".to_string(),
                    stock_name: "KB금융".to_string(),
                    action: TradeAction::Buy,
                    shares: 200,
                    trade_value: dec!(1500000),
                    reason: "금융 섹터 비중 확대".to_string(),
                },
            ],
            expected_results: [
                ("volatility_reduction", -15.0),
                ("sector_balance_improvement", 25.0),
            ]
            .into_iter()
            .collect(),
            estimated_cost: EstimatedCost {
                commission: dec!(2800),
                tax: dec!(4657),
            },
        }
    }

    // ========================================================================
    // 게이미피케이션
    // ========================================================================

    /// 요청한 사용자의 데모 게이미피케이션 현황.
    pub fn gamification_status(&self, user_id: &str) -> GamificationStatus {
        GamificationStatus {
            user_id: user_id.to_string(),
            total_points: 1500,
            level: Self::level(),
            badges: vec![Badge {
                badge_id: "first_week".to_string(),
                name: "첫 주 완주".to_string(),
                icon: "🎯".to_string(),
                achieved_at: Some("2024-01-10T15:30:00".to_string()),
            }],
            streaks: [("plan_adherence", 7), ("no_fomo", 14)].into_iter().collect(),
        }
    }

    /// 데모 주간 리더보드.
    pub fn leaderboard(&self) -> Leaderboard {
        let entry = |rank: u32, user_name: &str, points: u64, improvement: &str| LeaderboardEntry {
            rank,
            user_name: user_name.to_string(),
            points,
            improvement: improvement.to_string(),
        };

        Leaderboard {
            weekly: vec![
                entry(1, "투자왕", 2500, "+15%"),
                entry(2, "현명한투자자", 2300, "+12%"),
                entry(3, "장기투자자", 2100, "+10%"),
            ],
        }
    }
}
