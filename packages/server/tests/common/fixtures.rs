//! Board page fixtures shaped like real ministry list pages.

use chrono::{DateTime, Utc};
use jobs_core::common::PostingId;
use jobs_core::domains::postings::extraction::ExtractedFields;
use jobs_core::domains::postings::synthesizer::synthesize_posting;
use jobs_core::domains::postings::JobPosting;
use jobs_core::domains::source::Source;
use jobs_core::kernel::FixedRandom;

pub const EMPLOYMENT_MINISTRY: &str = "고용노동부";
pub const EMPLOYMENT_URL: &str = "https://www.moel.go.kr/news/notice/noticeList.do?searchDivCd=004";

pub const EDUCATION_MINISTRY: &str = "교육부";
pub const EDUCATION_URL: &str =
    "https://www.moe.go.kr/boardCnts/listRenew.do?boardID=194&m=020602&s=moe";

pub const LEGISLATION_MINISTRY: &str = "법제처";
pub const LEGISLATION_URL: &str = "https://www.moleg.go.kr/board.es?mid=a10504000000&bid=0010";

pub const FOREIGN_MINISTRY: &str = "외교부";
pub const FOREIGN_URL: &str = "https://www.mofa.go.kr/www/brd/m_4079/list.do";

/// One notice row: (title, href, date).
pub type Row<'a> = (&'a str, &'a str, &'a str);

/// A typical `<table>` board with number, title, department and date columns.
pub fn table_board(rows: &[Row<'_>]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (title, href, date))| {
            format!(
                r#"<tr>
                    <td class="num">{}</td>
                    <td class="title"><a href="{}">{}</a></td>
                    <td>운영지원과</td>
                    <td class="date">{}</td>
                </tr>"#,
                rows.len() - i,
                href,
                title,
                date
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head><meta charset="utf-8"><title>채용공고</title></head>
<body>
  <div class="board_list">
    <table>
      <thead><tr><th>번호</th><th>제목</th><th>부서</th><th>등록일</th></tr></thead>
      <tbody>{}</tbody>
    </table>
  </div>
</body>
</html>"#,
        body
    )
}

/// The employment ministry's list layout: no table, label and date inline.
pub fn labelled_list_board(items: &[Row<'_>]) -> String {
    let body: String = items
        .iter()
        .map(|(title, href, date)| {
            format!(
                r#"<li><a href="{}">{}</a> <span>{}</span></li>"#,
                href, title, date
            )
        })
        .collect();

    format!(
        r#"<html><body><ul class="notice-list">{}</ul></body></html>"#,
        body
    )
}

pub fn maintenance_page() -> String {
    "<html><body><div class=\"notice\"><p>시스템 점검 중입니다.</p></div></body></html>".to_string()
}

/// A stored posting as the pipeline would have written it at `created_at`.
pub fn stored_posting(title: &str, source: &Source, created_at: DateTime<Utc>) -> JobPosting {
    let fields = ExtractedFields {
        title: title.to_string(),
        date_text: None,
        posted_on: None,
        detail_url: None,
    };
    synthesize_posting(&fields, source, created_at, &FixedRandom::new(1))
        .into_posting(PostingId::new(), created_at)
}
