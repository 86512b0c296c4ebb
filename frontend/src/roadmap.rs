use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseId {
    Phase1,
    Phase2,
    Phase3,
    Phase4,
}

impl PhaseId {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseId::Phase1 => "phase1",
            PhaseId::Phase2 => "phase2",
            PhaseId::Phase3 => "phase3",
            PhaseId::Phase4 => "phase4",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseStatus {
    Progress,
    Planned,
    Vision,
}

impl PhaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            PhaseStatus::Progress => "🔄 In Progress",
            PhaseStatus::Planned => "📋 Planned",
            PhaseStatus::Vision => "🔮 Vision",
        }
    }

    pub fn badge_color(self, theme: &Theme) -> &'static str {
        match self {
            PhaseStatus::Progress => theme.teal,
            PhaseStatus::Planned => theme.purple,
            PhaseStatus::Vision => theme.muted_gold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deliverable {
    pub text: &'static str,
    pub completed: bool,
}

const fn pending(text: &'static str) -> Deliverable {
    Deliverable { text, completed: false }
}

const fn done(text: &'static str) -> Deliverable {
    Deliverable { text, completed: true }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

const fn metric(value: &'static str, label: &'static str) -> Metric {
    Metric { value, label }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub id: PhaseId,
    pub title: &'static str,
    pub timeline: &'static str,
    pub status: PhaseStatus,
    pub description: &'static str,
    pub objectives: &'static [&'static str],
    pub deliverables: &'static [Deliverable],
    pub metrics: &'static [Metric],
}

pub static PHASES: [Phase; 4] = [
    Phase {
        id: PhaseId::Phase1,
        title: "Foundation & MVP",
        timeline: "October - December 2025",
        status: PhaseStatus::Progress,
        description: "Launch core platform with basic loan functionality, onboard pilot artists, and establish proof of concept.",
        objectives: &[
            "Launch core platform with basic loan functionality",
            "Onboard pilot artists and establish proof of concept",
            "Build foundational community and validate market fit",
        ],
        deliverables: &[
            done("Landing Page & Branding"),
            pending("Smart Contracts v1.0 - Basic loan creation and management"),
            pending("Artist Dashboard v1.0 - Loan applications and portfolio"),
            pending("Backer Dashboard v1.0 - Browse and invest interface"),
            pending("User authentication with Web3 wallets"),
            pending("Database schema and API routes"),
            pending("Artist membership system ($10/month)"),
        ],
        metrics: &[
            metric("3-5", "Verified Artists"),
            metric("5-10", "Loan Cycles"),
            metric("50+", "Registered Backers"),
            metric("$2-5K", "Total Loans"),
        ],
    },
    Phase {
        id: PhaseId::Phase2,
        title: "Fractionalization & Marketplace",
        timeline: "Q1 2026 (January - March)",
        status: PhaseStatus::Planned,
        description: "Enable micro-investments through loan fractionalization, launch secondary marketplace, and scale community growth.",
        objectives: &[
            "Enable micro-investments through loan fractionalization",
            "Launch secondary marketplace for loan rights trading",
            "Scale artist onboarding and community growth",
        ],
        deliverables: &[
            pending("Fractional Loan Rights (ERC-1155) - Tokenized loan fractions"),
            pending("Marketplace Contract - P2P trading of loan fractions"),
            pending("Automated Repayment System - Smart contract triggers"),
            pending("Enhanced Dashboards - Advanced portfolio analytics"),
            pending("Gamification System - Badges and leaderboards"),
            pending("Artist Success Programs - Referral incentives"),
        ],
        metrics: &[
            metric("15+", "Active Artists"),
            metric("200+", "Registered Users"),
            metric("$10K+", "Active Loans"),
            metric("500+", "Fraction Trades"),
        ],
    },
    Phase {
        id: PhaseId::Phase3,
        title: "Events & Automation",
        timeline: "Q2-Q3 2026 (April - September)",
        status: PhaseStatus::Planned,
        description: "Integrate with physical art events, implement automated valuation, and establish sustainable revenue streams.",
        objectives: &[
            "Integrate with physical art events and galleries",
            "Implement automated valuation and risk assessment",
            "Establish sustainable revenue streams and partnerships",
        ],
        deliverables: &[
            pending("AI-Powered Valuation Engine - Automated artwork pricing"),
            pending("Oracle Integration - Real-time market data feeds"),
            pending("Gallery Partnership System - Event integrations"),
            pending("POAP & NFT Integration - Digital twins and perks"),
            pending("Premium Features - Advanced analytics and access"),
            pending("Sponsorship Program - Corporate partnerships"),
        ],
        metrics: &[
            metric("100+", "Artworks"),
            metric("$50K+", "Total Loans"),
            metric("5+", "Gallery Partners"),
            metric("$5K+", "Monthly Revenue"),
        ],
    },
    Phase {
        id: PhaseId::Phase4,
        title: "Multi-City Expansion",
        timeline: "2027+",
        status: PhaseStatus::Vision,
        description: "Expand to multiple cities, integrate with broader DeFi ecosystems, and establish as a global cooperative.",
        objectives: &[
            "Expand to multiple cities and art markets",
            "Integrate with broader DeFi and NFT ecosystems",
            "Establish Open Artist Bank as a global cooperative",
        ],
        deliverables: &[
            pending("Multi-City Architecture - Federated city networks"),
            pending("DeFi Integration - Yield farming and protocol integration"),
            pending("DAO Structure - Community governance tokens"),
            pending("Global Expansion - 10+ active markets"),
            pending("Celebrity Partnerships - High-profile campaigns"),
            pending("Institutional Features - Accredited investor tools"),
        ],
        metrics: &[
            metric("10+", "Active Cities"),
            metric("$1M+", "Facilitated Loans"),
            metric("1000+", "Artists"),
            metric("10K+", "Backers"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub phase: &'static str,
    pub description: &'static str,
}

pub static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        date: "Oct-Dec 2025",
        phase: "Foundation & MVP",
        description: "Launch core platform, onboard pilot artists, validate market fit",
    },
    TimelineEntry {
        date: "Q1 2026",
        phase: "Fractionalization",
        description: "Enable micro-investments, launch secondary marketplace",
    },
    TimelineEntry {
        date: "Q2-Q3 2026",
        phase: "Events & Automation",
        description: "Gallery partnerships, AI valuation, sustainable revenue",
    },
    TimelineEntry {
        date: "2027+",
        phase: "Global Expansion",
        description: "Multi-city launch, DeFi integration, global cooperative",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            TimelineSide::Left => "left",
            TimelineSide::Right => "right",
        }
    }
}

/// Which phase block the roadmap shows. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseNavigator {
    active: PhaseId,
}

impl Default for PhaseNavigator {
    fn default() -> Self {
        Self { active: PHASES[0].id }
    }
}

impl PhaseNavigator {
    pub fn active(&self) -> PhaseId {
        self.active
    }

    pub fn select(&mut self, id: PhaseId) {
        self.active = id;
    }

    pub fn is_active(&self, id: PhaseId) -> bool {
        self.active == id
    }

    pub fn visible_phases(&self) -> impl Iterator<Item = &'static Phase> + '_ {
        PHASES.iter().filter(move |phase| self.is_active(phase.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ART_THEME;
    use std::collections::HashSet;

    #[test]
    fn roadmap_starts_on_first_phase() {
        let nav = PhaseNavigator::default();
        assert_eq!(nav.active(), PhaseId::Phase1);
        let visible: Vec<_> = nav.visible_phases().map(|p| p.id).collect();
        assert_eq!(visible, vec![PhaseId::Phase1]);
    }

    #[test]
    fn selecting_shows_exactly_the_selected_phase() {
        let mut nav = PhaseNavigator::default();
        for phase in PHASES.iter() {
            nav.select(phase.id);
            let visible: Vec<_> = nav.visible_phases().collect();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].id, phase.id);
            assert!(PHASES.iter().filter(|p| p.id != phase.id).all(|p| !nav.is_active(p.id)));
        }
    }

    #[test]
    fn reselecting_is_idempotent() {
        for phase in PHASES.iter() {
            let mut once = PhaseNavigator::default();
            once.select(phase.id);
            let mut twice = once;
            twice.select(phase.id);
            assert_eq!(once, twice);
            assert_eq!(
                once.visible_phases().map(|p| p.title).collect::<Vec<_>>(),
                twice.visible_phases().map(|p| p.title).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let ids: Vec<_> = PHASES.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["phase1", "phase2", "phase3", "phase4"]);
        let unique: HashSet<_> = PHASES.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), PHASES.len());
    }

    #[test]
    fn only_the_mvp_is_in_progress() {
        let in_progress: Vec<_> = PHASES
            .iter()
            .filter(|p| p.status == PhaseStatus::Progress)
            .map(|p| p.id)
            .collect();
        assert_eq!(in_progress, vec![PhaseId::Phase1]);
        assert_eq!(PHASES[3].status, PhaseStatus::Vision);
    }

    #[test]
    fn every_phase_has_content() {
        for phase in PHASES.iter() {
            assert_eq!(phase.objectives.len(), 3, "{}", phase.title);
            assert!(!phase.deliverables.is_empty());
            assert_eq!(phase.metrics.len(), 4);
        }
        let completed: Vec<_> = PHASES
            .iter()
            .flat_map(|p| p.deliverables.iter())
            .filter(|d| d.completed)
            .map(|d| d.text)
            .collect();
        assert_eq!(completed, vec!["Landing Page & Branding"]);
    }

    #[test]
    fn status_badges() {
        assert_eq!(PhaseStatus::Progress.label(), "🔄 In Progress");
        assert_eq!(PhaseStatus::Planned.badge_color(&ART_THEME), ART_THEME.purple);
        assert_eq!(PhaseStatus::Vision.badge_color(&ART_THEME), ART_THEME.muted_gold);
    }

    #[test]
    fn timeline_alternates_sides() {
        let sides: Vec<_> = (0..TIMELINE.len()).map(TimelineSide::for_index).collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left, TimelineSide::Right]
        );
    }
}
