//! Localized captions baked into the artifacts.
//!
//! These are artifact content, not UI strings: section headers of the
//! document and column headers of the workbook. The renderers receive
//! them as plain inputs so the rendering rules stay independent of the
//! language.

use athar_core::Language;

/// Section and table captions for the narrative document.
#[derive(Debug, Clone, Copy)]
pub struct DocumentLabels {
    pub executive_summary: &'static str,
    pub problem_analysis: &'static str,
    pub theory_of_change: &'static str,
    pub specific_goals: &'static str,
    pub swot: &'static str,
    pub activity_matrix: &'static str,
    pub me_plan: &'static str,
    /// Activity-matrix column headers.
    pub activity: &'static str,
    pub details: &'static str,
    pub output: &'static str,
}

impl DocumentLabels {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::Arabic => Self {
                executive_summary: "الملخص التنفيذي",
                problem_analysis: "تحليل المشكلة ونظرية التغيير",
                theory_of_change: "نظرية التغيير",
                specific_goals: "الأهداف المحددة (SMART)",
                swot: "تحليل SWOT المعمق",
                activity_matrix: "مصفوفة الأنشطة",
                me_plan: "خطة المراقبة والتقييم (M&E)",
                activity: "النشاط",
                details: "التفاصيل",
                output: "المخرج",
            },
            Language::English => Self {
                executive_summary: "Executive Summary",
                problem_analysis: "Problem Analysis & Theory of Change",
                theory_of_change: "Theory of Change",
                specific_goals: "Specific SMART Goals",
                swot: "In-depth SWOT Analysis",
                activity_matrix: "Activity Matrix",
                me_plan: "Monitoring & Evaluation (M&E) Plan",
                activity: "Activity",
                details: "Details",
                output: "Output",
            },
        }
    }
}

/// Column captions for the budget workbook.
///
/// The first three columns localize; the remaining captions are fixed
/// donor-template English regardless of language.
#[derive(Debug, Clone, Copy)]
pub struct BudgetLabels {
    pub budget_code: &'static str,
    pub item: &'static str,
    pub monthly_cost: &'static str,
    pub allocation: &'static str,
    pub quantity: &'static str,
    pub unit: &'static str,
    pub frequency: &'static str,
    pub frequency_unit: &'static str,
    pub total: &'static str,
    pub description: &'static str,
}

impl BudgetLabels {
    pub fn for_language(lang: Language) -> Self {
        let (budget_code, item, monthly_cost) = match lang {
            Language::Arabic => ("رمز الموازنة", "العنصر", "الكلفة الشهرية"),
            Language::English => ("Budget Code", "Item", "Monthly Cost"),
        };

        Self {
            budget_code,
            item,
            monthly_cost,
            allocation: "Allocation",
            quantity: "Qty",
            unit: "Unit",
            frequency: "Freq",
            frequency_unit: "Freq Unit",
            total: "Total",
            description: "Narrative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_labels_localize() {
        let ar = DocumentLabels::for_language(Language::Arabic);
        let en = DocumentLabels::for_language(Language::English);

        assert_eq!(ar.activity, "النشاط");
        assert_eq!(en.activity, "Activity");
        assert_ne!(ar.executive_summary, en.executive_summary);
    }

    #[test]
    fn budget_tail_captions_are_language_independent() {
        let ar = BudgetLabels::for_language(Language::Arabic);
        let en = BudgetLabels::for_language(Language::English);

        assert_ne!(ar.item, en.item);
        assert_eq!(ar.allocation, en.allocation);
        assert_eq!(ar.total, "Total");
        assert_eq!(en.description, "Narrative");
    }
}
