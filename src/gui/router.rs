// src/gui/router.rs
use crate::config::options::ReportKind;
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::schedule::PAGE,
    &pages::standings::PAGE,
    &pages::batting::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: ReportKind) -> &'static dyn Page {
    match kind {
        ReportKind::Schedule  => &pages::schedule::PAGE,
        ReportKind::Standings => &pages::standings::PAGE,
        ReportKind::Batting   => &pages::batting::PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_report_has_a_page() {
        for kind in ReportKind::ALL {
            assert_eq!(page_for(kind).kind(), kind);
            assert!(PAGES.iter().any(|p| p.kind() == kind));
        }
    }
}
