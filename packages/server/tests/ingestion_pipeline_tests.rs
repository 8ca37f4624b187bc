mod common;

use chrono::Duration;
use common::*;
use jobs_core::domains::postings::classifier::ClassifierRule;
use jobs_core::domains::postings::{run_poll_cycle, CycleReport};
use jobs_core::domains::source::{PolicyTable, SourcePolicy, MINISTRY_SOURCES};
use jobs_core::kernel::{BaseClock, BaseJobStore, MockPageFetcher, TestDependencies};
use reqwest::StatusCode;
use test_context::test_context;

// =============================================================================
// Tests: classification and synthesis through a full cycle
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn employment_label_notice_becomes_research_posting(ctx: &TestHarness) {
    ctx.register(EMPLOYMENT_MINISTRY, EMPLOYMENT_URL);
    ctx.fetcher.set_page(
        EMPLOYMENT_URL,
        labelled_list_board(&[(
            "[인사] 2024년 연구원 채용",
            "/news/notice/noticeView.do?bbs_seq=20240301",
            "2024.03.01",
        )]),
    );

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.postings_inserted, 1);

    let postings = ctx.postings_for(EMPLOYMENT_MINISTRY);
    assert_eq!(postings.len(), 1);
    let posting = &postings[0];
    assert_eq!(posting.title, "[인사] 2024년 연구원 채용");
    assert_eq!(posting.job_type, "연구직");
    assert_eq!(posting.employment_type, "정규직");
    assert_eq!(posting.positions, 2);
    assert!(posting.positions_estimated);
    assert!(!posting.is_urgent);
    assert!(posting.is_new);
    assert_eq!(
        posting.original_url,
        "https://www.moel.go.kr/news/notice/noticeView.do?bbs_seq=20240301"
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn seminar_notice_on_general_board_is_rejected(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[(
            "2024년 세미나 개최 안내",
            "/boardCnts/view.do?boardID=194&boardSeq=1",
            "2024.02.28",
        )]),
    );

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.sources_polled, 1);
    assert_eq!(report.candidates_accepted, 0);
    assert_eq!(report.postings_inserted, 0);
    assert!(ctx.store.postings().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn legislation_board_drops_events_unless_announced(ctx: &TestHarness) {
    ctx.register(LEGISLATION_MINISTRY, LEGISLATION_URL);
    ctx.fetcher.set_page(
        LEGISLATION_URL,
        table_board(&[
            ("법령해석 세미나 개최", "/board.es?act=view&list_no=4", "2024.02.27"),
            ("채용 설명회 개최", "/board.es?act=view&list_no=3", "2024.02.26"),
            ("2024년 법제처 공무직 근로자 채용 공고", "/board.es?act=view&list_no=2", "2024.02.25"),
            ("예산 설명회 공고", "/board.es?act=view&list_no=1", "2024.02.24"),
        ]),
    );

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.candidates_accepted, 2);

    let titles: Vec<_> = ctx
        .postings_for(LEGISLATION_MINISTRY)
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(
        titles,
        vec!["2024년 법제처 공무직 근로자 채용 공고", "예산 설명회 공고"]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn postings_carry_a_thirty_day_window_from_poll_time(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[(
            "교육부 긴급 계약직 5명 채용 공고",
            "/boardCnts/view.do?boardID=194&boardSeq=77",
            "2024.02.28",
        )]),
    );

    run_poll_cycle(&ctx.deps).await;

    let posting = &ctx.postings_for(EDUCATION_MINISTRY)[0];
    let now = ctx.clock.now();
    assert_eq!(posting.application_period_start, now);
    assert_eq!(posting.application_period_end, now + Duration::days(30));
    assert_eq!(posting.created_at, now);
    assert_eq!(posting.positions, 5);
    assert!(!posting.positions_estimated);
    assert!(posting.is_urgent);
    assert_eq!(posting.job_type, "계약직");
    assert_eq!(posting.employment_type, "계약직");
    assert_eq!(
        posting.original_url,
        "https://www.moe.go.kr/boardCnts/view.do?boardID=194&boardSeq=77"
    );
}

#[tokio::test]
async fn missing_head_count_takes_the_injected_estimate() {
    let ctx = TestHarness::with_deps(
        TestDependencies::new()
            .random(3)
            .with_source(EDUCATION_MINISTRY, EDUCATION_URL),
    );
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[("공무직 근로자 채용 공고", "/view.do?seq=1", "2024.02.28")]),
    );

    run_poll_cycle(&ctx.deps).await;

    let posting = &ctx.postings_for(EDUCATION_MINISTRY)[0];
    assert_eq!(posting.positions, 3);
    assert!(posting.positions_estimated);
}

#[tokio::test]
async fn policy_table_entry_replaces_the_general_rule() {
    let policies = PolicyTable::standard().with_policy(
        EDUCATION_MINISTRY,
        SourcePolicy::with_rule(ClassifierRule::AllowList {
            keywords: &["연구사"],
        }),
    );
    let ctx = TestHarness::with_deps(
        TestDependencies::new()
            .policies(policies)
            .with_source(EDUCATION_MINISTRY, EDUCATION_URL),
    );
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[
            ("2024년 교육연구사 특별채용 공고", "/view.do?seq=2", "2024.02.28"),
            ("공무직 근로자 채용 공고", "/view.do?seq=1", "2024.02.27"),
        ]),
    );

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.candidates_accepted, 1);

    let titles: Vec<_> = ctx.store.postings().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["2024년 교육연구사 특별채용 공고"]);
}

// =============================================================================
// Tests: dedup gate and per-source cap
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn second_cycle_over_unchanged_pages_inserts_nothing(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[
            ("2024년 교육연구사 특별채용 공고", "/boardCnts/view.do?boardSeq=2", "2024.02.28"),
            ("공무직 근로자 채용 공고", "/boardCnts/view.do?boardSeq=1", "2024.02.27"),
        ]),
    );

    let first = run_poll_cycle(&ctx.deps).await;
    assert_eq!(first.postings_inserted, 2);

    let second = run_poll_cycle(&ctx.deps).await;
    assert_eq!(second.postings_inserted, 0);
    assert_eq!(second.duplicates_skipped, 2);
    assert_eq!(ctx.store.postings().len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn at_most_three_postings_per_source_per_cycle(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    let titles: Vec<String> = (1..=5)
        .map(|n| format!("2024년 제{}회 경력경쟁채용시험 공고", n))
        .collect();
    let rows: Vec<Row<'_>> = titles
        .iter()
        .map(|t| (t.as_str(), "/boardCnts/view.do", "2024.02.28"))
        .collect();
    ctx.fetcher.set_page(EDUCATION_URL, table_board(&rows));

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.candidates_accepted, 3);
    assert_eq!(report.postings_inserted, 3);

    let stored: Vec<_> = ctx.store.postings().into_iter().map(|p| p.title).collect();
    assert_eq!(stored, titles[..3].to_vec());

    // The cap applies before dedup, so later rows never get a turn.
    let again = run_poll_cycle(&ctx.deps).await;
    assert_eq!(again.postings_inserted, 0);
    assert_eq!(again.duplicates_skipped, 3);
}

#[tokio::test]
async fn configured_cap_limits_postings_per_source() {
    let ctx = TestHarness::with_deps(
        TestDependencies::new()
            .max_postings_per_source(1)
            .with_source(EDUCATION_MINISTRY, EDUCATION_URL),
    );
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[
            ("2024년 교육연구사 특별채용 공고", "/view.do?seq=3", "2024.02.28"),
            ("공무직 근로자 채용 공고", "/view.do?seq=2", "2024.02.27"),
            ("기간제 연구원 채용 공고", "/view.do?seq=1", "2024.02.26"),
        ]),
    );

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.candidates_accepted, 1);
    assert_eq!(report.postings_inserted, 1);

    let titles: Vec<_> = ctx.store.postings().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["2024년 교육연구사 특별채용 공고"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn repeated_row_in_one_cycle_is_stored_once(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    let row = ("공무직 근로자 채용 공고", "/boardCnts/view.do?boardSeq=9", "2024.02.28");
    ctx.fetcher
        .set_page(EDUCATION_URL, table_board(&[row, row]));

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.candidates_accepted, 2);
    assert_eq!(report.postings_inserted, 1);
    assert_eq!(report.duplicates_skipped, 1);
    assert_eq!(ctx.store.postings().len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn same_title_is_kept_separately_per_ministry(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    ctx.register(FOREIGN_MINISTRY, FOREIGN_URL);
    let page = table_board(&[("공무직 근로자 채용 공고", "/view.do?seq=1", "2024.02.28")]);
    ctx.fetcher.set_page(EDUCATION_URL, page.clone());
    ctx.fetcher.set_page(FOREIGN_URL, page);

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.postings_inserted, 2);
}

// =============================================================================
// Tests: failure isolation
// =============================================================================

#[tokio::test]
async fn fetch_failures_do_not_stop_other_sources() {
    let fetcher = MockPageFetcher::new()
        .with_status(FOREIGN_URL, StatusCode::SERVICE_UNAVAILABLE)
        .with_timeout(LEGISLATION_URL)
        .with_page(
            EDUCATION_URL,
            table_board(&[("공무직 근로자 채용 공고", "/view.do?seq=1", "2024.02.28")]),
        );
    let ctx = TestHarness::with_deps(
        TestDependencies::new()
            .mock_fetcher(fetcher)
            .with_source(FOREIGN_MINISTRY, FOREIGN_URL)
            .with_source(LEGISLATION_MINISTRY, LEGISLATION_URL)
            .with_source(EDUCATION_MINISTRY, EDUCATION_URL),
    );

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.sources_polled, 3);
    assert_eq!(report.failed_sources, 2);
    assert_eq!(report.postings_inserted, 1);
    // Sources with equal creation times are polled by name.
    assert_eq!(
        ctx.fetcher.calls(),
        vec![EDUCATION_URL, LEGISLATION_URL, FOREIGN_URL]
    );

    // Only sources whose page was scanned get a last-checked time.
    assert_eq!(
        ctx.source(EDUCATION_MINISTRY).last_checked_at,
        Some(ctx.clock.now())
    );
    assert_eq!(ctx.source(FOREIGN_MINISTRY).last_checked_at, None);
    assert_eq!(ctx.source(LEGISLATION_MINISTRY).last_checked_at, None);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn page_without_rows_is_unmatched_but_checked(ctx: &TestHarness) {
    ctx.register(EDUCATION_MINISTRY, EDUCATION_URL);
    ctx.fetcher.set_page(EDUCATION_URL, maintenance_page());

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.unmatched_sources, 1);
    assert_eq!(report.failed_sources, 0);
    assert_eq!(
        ctx.source(EDUCATION_MINISTRY).last_checked_at,
        Some(ctx.clock.now())
    );
}

#[tokio::test]
async fn failed_inserts_drop_only_those_postings() {
    let (ctx, flaky) = TestHarness::with_flaky_store(
        TestDependencies::new().with_source(EDUCATION_MINISTRY, EDUCATION_URL),
    );
    ctx.fetcher.set_page(
        EDUCATION_URL,
        table_board(&[
            ("2024년 교육연구사 특별채용 공고", "/view.do?seq=2", "2024.02.28"),
            ("공무직 근로자 채용 공고", "/view.do?seq=1", "2024.02.27"),
        ]),
    );

    flaky.fail_inserts(true);
    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report.candidates_accepted, 2);
    assert_eq!(report.postings_inserted, 0);
    assert_eq!(report.failed_sources, 0);
    assert!(ctx.store.postings().is_empty());
    assert!(ctx.source(EDUCATION_MINISTRY).last_checked_at.is_some());

    // Dropped candidates come back on the next cycle.
    flaky.fail_inserts(false);
    let retry = run_poll_cycle(&ctx.deps).await;
    assert_eq!(retry.postings_inserted, 2);
}

#[tokio::test]
async fn source_listing_failure_skips_the_cycle() {
    let (ctx, flaky) = TestHarness::with_flaky_store(
        TestDependencies::new().with_source(EDUCATION_MINISTRY, EDUCATION_URL),
    );
    flaky.fail_listing(true);

    let report = run_poll_cycle(&ctx.deps).await;
    assert_eq!(report, CycleReport::default());
    assert_eq!(ctx.fetcher.call_count(), 0);
}

// =============================================================================
// Tests: provisioning
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn seed_list_is_provisioned_once(ctx: &TestHarness) {
    let inserted = ctx.store.ensure_sources(MINISTRY_SOURCES).await.unwrap();
    assert_eq!(inserted, MINISTRY_SOURCES.len());

    let again = ctx.store.ensure_sources(MINISTRY_SOURCES).await.unwrap();
    assert_eq!(again, 0);

    let active = ctx.store.list_active_sources().await.unwrap();
    assert_eq!(active.len(), MINISTRY_SOURCES.len());
    assert!(active.iter().all(|s| s.last_checked_at.is_none()));
    assert!(active.iter().all(|s| s.created_at == ctx.clock.now()));
}
