// * Report Assembler
// * resolve -> per candidate: fetch + extract + diff + rank -> paced emit.
// * A failing sub-report becomes a note on its block; the cycle always runs to the end.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ScoutConfig;
use crate::engine::differ::{self, AlignmentError};
use crate::engine::pacing::Pacer;
use crate::engine::ranking;
use crate::engine::report::ReportBlock;
use crate::engine::resolver::{GuildCandidate, GuildResolver, ResolveError};
use crate::network::{expand_template, GuildSearch, NetworkError, PageFetcher};
use crate::ops::telemetry;
use crate::refinery::{self, ExtractionError, MemberStanding, RoundRecord};
use crate::sink::ReportSink;

pub const SECTION_EVENTS: &str = "Recent GW results";
pub const SECTION_OPPONENT_ROUNDS: &str = "Their current GW";
pub const SECTION_MEMBERS: &str = "Member ranking";
pub const SECTION_OWN_ROUNDS: &str = "Our current GW";
pub const SECTION_COMPARISON: &str = "Us vs them";

/// Why a sub-report could not be built
#[derive(Debug, thiserror::Error)]
pub enum SubReportError {
    #[error(transparent)]
    Fetch(#[from] NetworkError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// What one report cycle produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub total_matches: usize,
    /// More crews matched than were reported on
    pub truncated: bool,
    pub blocks_emitted: usize,
    pub partial_blocks: usize,
    pub emit_failures: usize,
}

pub struct ReportAssembler {
    config: ScoutConfig,
    fetcher: Arc<dyn PageFetcher>,
    resolver: GuildResolver,
    sink: Arc<dyn ReportSink>,
}

impl ReportAssembler {
    pub fn new(
        config: ScoutConfig,
        fetcher: Arc<dyn PageFetcher>,
        search: Arc<dyn GuildSearch>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            config,
            fetcher,
            resolver: GuildResolver::new(search),
            sink,
        }
    }

    pub fn sink(&self) -> &Arc<dyn ReportSink> {
        &self.sink
    }

    /// Runs one full cycle for a crew name. Only resolution failures are returned;
    /// everything after that is contained per block.
    pub async fn run(&self, query: &str) -> Result<CycleSummary, ResolveError> {
        let resolution = self.resolver.resolve(query).await?;
        let mut summary = CycleSummary {
            total_matches: resolution.total_matches,
            truncated: resolution.is_truncated(),
            ..Default::default()
        };

        if let Some(notice) = resolution.truncation_notice() {
            if let Err(e) = self.sink.send_text(&notice).await {
                warn!(error = %e, "Failed to send truncation notice");
                summary.emit_failures += 1;
            }
        }

        // * Our own history is the same for every candidate, fetch it once
        let own_rounds = match &self.config.my_guild {
            Some(id) => Some(self.round_history(id).await),
            None => None,
        };

        let pacer = Pacer::new(self.config.pacing);
        for candidate in &resolution.candidates {
            let block = self.build_block(candidate, own_rounds.as_ref()).await;
            if block.is_partial() {
                summary.partial_blocks += 1;
                telemetry::record_report_block("partial");
            }

            pacer.wait().await;
            match self.sink.send_block(&block).await {
                Ok(()) => {
                    summary.blocks_emitted += 1;
                    telemetry::record_report_block("emitted");
                }
                Err(e) => {
                    warn!(crew = %candidate.id, error = %e, "Failed to emit report block");
                    summary.emit_failures += 1;
                    telemetry::record_report_block("emit_failed");
                }
            }
        }

        info!(
            query,
            emitted = summary.blocks_emitted,
            partial = summary.partial_blocks,
            failed = summary.emit_failures,
            "Report cycle finished"
        );
        Ok(summary)
    }

    /// Builds the block for one candidate. Never fails; problems end up in `notes`.
    pub async fn build_block(
        &self,
        candidate: &GuildCandidate,
        own_rounds: Option<&Result<Vec<RoundRecord>, SubReportError>>,
    ) -> ReportBlock {
        let title = format!("{} (ID {})", candidate.display_name, candidate.id);
        let mut block = ReportBlock::new(title);
        match expand_template(&self.config.crew_page_url, &candidate.id) {
            Ok(link) => block.link = Some(link),
            Err(e) => warn!(crew = %candidate.id, error = %e, "Skipping crew page link"),
        }

        let summary = candidate.summary();
        if !summary.is_empty() {
            block.section(SECTION_EVENTS, summary.join("\n"));
        }

        let opponent_rounds = self.round_history(&candidate.id).await;
        match &opponent_rounds {
            Ok(rounds) => {
                block.section(SECTION_OPPONENT_ROUNDS, differ::render_round_history(rounds))
            }
            Err(e) => skip(&mut block, &candidate.id, SECTION_OPPONENT_ROUNDS, e),
        }

        match self.member_roster(&candidate.id).await {
            Ok(members) => block.section(SECTION_MEMBERS, ranking::render(&ranking::rank(members))),
            Err(e) => skip(&mut block, &candidate.id, SECTION_MEMBERS, &e),
        }

        // * Own-guild sections only exist when a guild is configured
        let Some(own_rounds) = own_rounds else {
            return block;
        };

        match own_rounds {
            Ok(rounds) => block.section(SECTION_OWN_ROUNDS, differ::render_round_history(rounds)),
            Err(e) => skip(&mut block, &candidate.id, SECTION_OWN_ROUNDS, e),
        }

        match (own_rounds, &opponent_rounds) {
            (Ok(ours), Ok(theirs)) => match differ::diff(ours, theirs) {
                Ok(rows) => block.section(SECTION_COMPARISON, differ::render_comparison(&rows)),
                Err(e) => {
                    let err = SubReportError::from(e);
                    skip(&mut block, &candidate.id, SECTION_COMPARISON, &err)
                }
            },
            _ => block.note(format!("{} skipped: round history unavailable", SECTION_COMPARISON)),
        }

        block
    }

    async fn round_history(&self, crew_id: &str) -> Result<Vec<RoundRecord>, SubReportError> {
        let url = expand_template(&self.config.history_url, crew_id)?;
        let html = self.fetcher.fetch(&url).await?;
        refinery::extract_round_history(&html).map_err(|e| {
            telemetry::record_extraction_failure("round_history");
            e.into()
        })
    }

    async fn member_roster(&self, crew_id: &str) -> Result<Vec<MemberStanding>, SubReportError> {
        let url = expand_template(&self.config.members_url, crew_id)?;
        let html = self.fetcher.fetch(&url).await?;
        refinery::extract_member_roster(&html).map_err(|e| {
            telemetry::record_extraction_failure("member_roster");
            e.into()
        })
    }
}

fn skip(block: &mut ReportBlock, crew_id: &str, section: &str, err: &SubReportError) {
    warn!(crew = crew_id, section, error = %err, "Sub-report skipped");
    block.note(format!("{} unavailable: {}", section, err));
}
