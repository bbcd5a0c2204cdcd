//! Literal content of the lead management maturity matrix.
//!
//! Both tables are fixed-size arrays, so "5 workstreams × 5 stages" and
//! "5 stage descriptions" hold by construction.

/// Number of maturity stages (matrix columns after the name column).
pub const STAGE_COUNT: usize = 5;

pub const MATRIX_SHEET_NAME: &str = "Maturity Matrix";
pub const MATRIX_TITLE: &str = "Lead Management Maturity Matrix";
pub const WORKSTREAM_LABEL: &str = "Workstream";

pub const SUMMARY_SHEET_NAME: &str = "Stage Descriptions";
pub const SUMMARY_TITLE: &str = "Maturity Stage Descriptions";

/// One business process area and its text for each maturity stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workstream {
    pub name: &'static str,
    pub stages: [&'static str; STAGE_COUNT],
}

/// A maturity stage name and its prose description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescription {
    pub name: &'static str,
    pub description: &'static str,
}

/// The five workstreams, in display order.
pub fn workstreams() -> &'static [Workstream; 5] {
    &WORKSTREAMS
}

/// The five stage descriptions, in stage order.
pub fn stage_descriptions() -> &'static [StageDescription; STAGE_COUNT] {
    &STAGE_DESCRIPTIONS
}

/// Stage names as used for the matrix header row.
pub fn stage_names() -> [&'static str; STAGE_COUNT] {
    STAGE_DESCRIPTIONS.map(|s| s.name)
}

static STAGE_DESCRIPTIONS: [StageDescription; STAGE_COUNT] = [
    StageDescription {
        name: "Stage 1: Documented",
        description: "Foundation level with basic processes documented but inconsistently followed. Manual operations dominate. SLAs exist but aren't enforced, routing is manual, and cross-channel coordination is limited.",
    },
    StageDescription {
        name: "Stage 2: Operationally Consistent",
        description: "Processes are enforced with SLAs, basic automation begins, cross-channel alignment established, and governance introduced. Systems enforce data quality and routing becomes semi-automated with fallback logic.",
    },
    StageDescription {
        name: "Stage 3: Enterprise Integrated",
        description: "Standardized workflows across all channels, unified systems, comprehensive measurement, and enterprise-wide governance. Single enterprise workflow replaces siloed processes, and routing becomes dynamic based on multiple factors.",
    },
    StageDescription {
        name: "Stage 4: Quantitatively Managed",
        description: "Automated workflows with AI assistance, predictive analytics, real-time measurement, and data-driven decision making. Machine learning drives routing, scoring, and recommendations. Real-time dashboards with predictive models.",
    },
    StageDescription {
        name: "Stage 5: Self-Optimizing",
        description: "Autonomous systems that learn and adapt, prescriptive analytics, continuous improvement embedded, and intelligent orchestration. Reinforcement learning optimizes routing automatically, AI performs tasks not just suggests, and the system self-heals performance issues.",
    },
];

static WORKSTREAMS: [Workstream; 5] = [
    Workstream {
        name: "1. Lead Strategy & Execution",
        stages: [
            "• Basic workflows documented\n• Draft SLAs exist\n• Manual routing\n• Limited cross-channel coordination",
            "• Operationalize SLAs (finalize values, configure CRM tracking, communicate to all channels)\n• Launch enterprise lead-routing policies (define rules by segment, create re-routing rules, introduce fallback routing)\n• Establish cross-channel governance (weekly SLA compliance reviews, executive escalation path)\n• Introduce lead tiering/prioritization (define urgency levels, create differentiated SLAs, update CRM views)",
            "• Standardize workflows across ALL channels (create single enterprise workflow, eliminate process variance, publish v3.0)\n• Deploy Enterprise Routing Engine v2 (multi-factor routing with client value/lead score/licensing/capacity)\n• Stand up enterprise governance with KPIs & consequences (monthly reviews of conversion/routing/data quality/SLA by channel)",
            "• Implement Dynamic Orchestration Engine (ML-assisted routing using propensity models, advisor capacity, engagement data)\n• Automate lead lifecycle transitions (auto-update statuses, remove manual steps, create multi-step workflows)\n• Introduce enterprise lead forecasting (predict volume by channel/trigger/segment, adjust staffing)\n• Establish enterprise OKRs (conversion, lead effectiveness, SLA compliance, revenue attribution)",
            "• Deploy Autonomous Routing Engine v4 (reinforcement learning, self-adjusting weights, auto-experimentation)\n• Implement adaptive strategies (auto-adjust cadence/channel/prioritization, predict optimal sequences)\n• Introduce guardrail-based governance (automated monitoring, auto-escalations at control limits)\n• Connect strategy to OKRs (project lead-driven revenue, auto-adjust strategies, surface risk alerts)",
        ],
    },
    Workstream {
        name: "2. Lead Creation",
        stages: [
            "• Basic trigger library\n• Manual suppression\n• No lead scoring\n• Inconsistent hand-offs",
            "• Expand Trigger Library (add rollover propensity, investment drift, distribution initiation, contribution changes)\n• Automate suppression logic (turn rules into automation, add frequency capping, prevent overlap)\n• Introduce lead-quality scoring v1 (define inputs, create rules-based logic, add to CRM)\n• Standardize Marketing→CRM hand-off (enforce required fields, validate integrity, automate ingestion)",
            "• Expand Trigger Library v2→v3 (add web events, plan interactions, calculators, life events; normalize metadata)\n• Introduce Lead Scoring v2 (weighted model with account size, trigger type, engagement, past behavior)\n• Industrialize suppression (connect datasets across wealth/retirement/marketing/call center, build API/data layer)\n• Introduce cross-channel deduping (fuzzy matching, merge before routing, canonical identifier)",
            "• Build Predictive Trigger Models v4 (ML models for high-ROI triggers using behavioral patterns, plan risk, conversion history)\n• Real-time data pipeline (move from batch to event streaming, near-instant triggers with suppression)\n• Lead Scoring v3 Predictive (ML model per business line, dynamic score updates based on actions)\n• Full-funnel suppression orchestration (span all channels, add explanations, AI-based over-touch prevention)",
            "• Deploy self-optimizing triggers (ML updates own weights, system creates/retires triggers, unsupervised learning)\n• Event-driven creation at scale (instant triggers from risk changes, market shocks, anomalies; composite triggers)\n• Implement adaptive suppression (AI predicts fatigue, auto-adjusts frequency, personalized by preference)\n• Connect to LTV models (prioritize by long-term value, drop low-LTV triggers automatically)",
        ],
    },
    Workstream {
        name: "3. Salesforce CRM Enhancements",
        stages: [
            "• Structured fields\n• Basic reporting\n• Manual data entry\n• No validation rules",
            "• Add enforcement layers (make SLA fields required, ensure complete lead data, prevent incorrect dispositions)\n• Enhance routing automation (build deterministic routing by client type/trigger/wealth threshold/capacity, add re-routing for missed SLAs)\n• Improve CRM UX Stage 2 (create simplified workspace with SLA timers, prioritized queue, trigger context panel)\n• Establish CRM adoption monitoring (weekly hygiene reports, enforce disposition standards, identify non-compliant users)",
            "• Deploy Lead Workspace v2 (add lead score, trigger context, SLA timer, recommended actions panels)\n• Implement advanced workflow automation (auto-create tasks, recycle unworked leads, trigger SLA breach notifications)\n• Integrate with marketing/retirement/advisor systems (build APIs for digital events, trigger data, book-of-business context)\n• Establish usage scorecards (track data hygiene, disposition accuracy, SLA compliance, activity logs by user)",
            "• Deploy AI Next Best Action (provide recommended outreach based on profile/history/similar outcomes)\n• AI-generated call summaries (auto-summarize calls/emails/chats, tag sentiment, identify opportunities)\n• Real-time SLA monitoring & enforcement (alerts for risks, auto-route if breach imminent, auto-escalations)\n• Unified Retirement+Wealth 360° view (merge plan/household data, integrate opportunities, 1-click segmentation)",
            "• Deploy Agentic CRM workflows (AI drafts outreach, schedules follow-ups, prepares briefs, updates dispositions)\n• Full CRM→Data Cloud fusion (unified customer graph, sub-second queries, enriched with historical/predictive context)\n• CRM-driven adaptive workflows (modify paths based on behavior, route based on strengths, auto-tune UI)\n• Introduce Advisor Digital Twin (AI model of skills/habits/performance, predict ideal leads/coaching needs)",
        ],
    },
    Workstream {
        name: "4. Measurement & Reporting",
        stages: [
            "• Basic dashboards\n• Limited KPIs\n• No SLA tracking\n• Siloed by channel",
            "• Expand dashboards for SLA measurement (track acceptance/first-attempt/cadence, display breach flags, create per-channel funnel)\n• Build cross-channel reporting (combine Retirement+Wealth, create single enterprise funnel, normalize dispositions)\n• Implement weekly data quality monitoring (detect missing fields/invalid dispositions/duplicates, produce DQ scorecard)\n• Introduce early attribution models (assign leads to channels, track revenue influence, prepare for multi-touch)",
            "• Build unified enterprise funnel dashboard (combine funnels, add drop-off/leakage/root-cause analysis, add segmentation views)\n• Implement closed-loop performance reporting (capture trigger→routed→worked→converted, build lead→revenue attribution)\n• Mature Data Dictionary v2→v3 (standardize across businesses, add metadata fields, create data contracts)\n• Introduce KPI targets & benchmarking (establish targets for acceptance/attempts/disposition/conversion; compare teams)",
            "• Implement real-time dashboards (streaming data updates for SLA, conversion windows, attribution, advisor productivity)\n• Build predictive conversion models (predict which leads convert and why, forecast by trigger/segment/persona)\n• Launch automated attribution engine (multi-touch across email/CRM/calls/digital, connect to revenue, produce ROI dashboards)\n• Introduce operational control limits (identify statistical norms, set acceptable ranges, trigger alerts on drift)",
            "• Deploy prescriptive analytics (recommend actions based on patterns/leakage/capacity, propose routing/trigger/playbook changes)\n• Autonomous KPI management (system takes action on drift: adjust routing, increase coaching, modify rules)\n• Automated experimentation engine (AI runs continuous A/B tests on routing/triggers/cadences/workflows, chooses winners)\n• Financial contribution modeling (full lead→revenue→LTV→P&L linkage, real-time business cases, surface financial risks)",
        ],
    },
    Workstream {
        name: "5. Practice Management",
        stages: [
            "• Playbooks documented\n• Ad-hoc training\n• No capacity modeling\n• Inconsistent coaching",
            "• Roll out mandatory training (train all advisors/wholesalers/reps, test understanding, certify completion)\n• Implement coaching cadence (managers review weekly performance, coach on SLA/quality, introduce scorecards)\n• Introduce capacity modeling basic (document advisor capacity, adjust routing by availability, publish monthly projections)\n• Launch QA program (review recordings/emails/notes, score against playbooks, feed insights to managers/analytics)",
            "• Implement structured coaching across channels (weekly coaching per advisor/rep, create scripts aligned to metrics, tie to performance mgmt)\n• Deploy capacity modeling v2 predictive (account for seasonal volume, advisor pipeline, workload variability)\n• Standardize performance scorecards by persona (identical KPIs for advisor/rep/wholesaler, create tiered groups, tie to compensation)\n• Formalize QA with enterprise rubric (standard rubric across businesses, review 5-10 interactions/month, feed to coaching loop)",
            "• Introduce performance-based routing (use QA/SLA/conversion to influence routing, reward top performers, reduce load for coaching needs)\n• Implement AI-enabled coaching (use call summaries for opportunities, predict drift/overload, recommend training modules)\n• Institutionalize advanced capacity planning (predict staffing weeks ahead, plan for surges, feed into routing engine)\n• Redesign compensation (add incentives for SLA/hygiene/conversion quality, introduce penalties for non-compliance)",
            "• AI-driven workforce optimization (real-time allocation based on demand, workload simulation, dynamic staffing suggestions)\n• Personalized AI coaching (customized micro-learning, identify root causes, on-demand vs scheduled)\n• Advisor mastery tiers auto-updated (system assigns tier, higher tiers get complex leads, prescriptive steps to advance)\n• Transform to dynamic rewards engine (compensation auto-adjusts to tiers, tied to OKRs, bonuses for AI-identified behaviors)",
        ],
    },
];
