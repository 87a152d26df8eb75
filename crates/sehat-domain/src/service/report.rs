//! Report rendering
//!
//! Four fixed plain-text templates (2 languages x 2 report kinds). Templates
//! only substitute precomputed record fields; all logic lives upstream.
//! Enum labels (sound, smoke, accident, status) stay in English inside the
//! Hindi templates, matching the original advisor behavior. The Hindi fleet
//! template has no market-pattern line; that asymmetry is inherited.

use sehat_types::Language;

use crate::model::{DiagnosticRecord, FleetSummary};

/// Render the single-vehicle diagnostic report
pub fn generate_diagnostic_report(record: &DiagnosticRecord, lang: Language) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    match lang {
        Language::English => {
            report.push_str("        Senior Expert's Diagnostic Report\n");
            report.push_str("==================================================\n");
            report.push_str(&format!("Vehicle Model:   {}\n", record.model));
            report.push_str(&format!("Overall Health:  {}%\n\n", record.health_score));

            report.push_str("[1. Engine & Mechanical Status]\n");
            report.push_str(&format!(
                "The system is showing {} sounds and {} smoke levels.\n",
                record.engine_sound, record.exhaust_smoke
            ));
            report.push_str(&format!("Engine condition is {}.\n\n", record.status));

            report.push_str("[2. Body & Safety Analysis]\n");
            report.push_str(&format!(
                "Accident History: {}. Body integrity is at {}%.\n\n",
                record.accident_history, record.body_condition_percent
            ));

            report.push_str("[3. Expert Findings on Your Issues]\n");
            for advisory in &record.advisories {
                report.push_str(advisory);
                report.push('\n');
            }
            report.push('\n');

            report.push_str("[4. Maintenance Roadmap]\n");
            report.push_str(&format!(
                "  Next Service:  within {} days\n",
                record.maintenance_window_days
            ));
            report.push_str(&format!("  Priority:      focus on {}\n", record.recommended_parts));
            report.push_str(&format!("  Verdict:       {}\n", record.verdict));
        }
        Language::Hindi => {
            report.push_str("      सीनियर एक्सपर्ट मैकेनिक की रिपोर्ट\n");
            report.push_str("==================================================\n");
            report.push_str(&format!("मॉडल:        {}\n", record.model));
            report.push_str(&format!("हेल्थ स्कोर:  {}%\n\n", record.health_score));

            report.push_str("[1. इंजन की स्थिति]\n");
            report.push_str(&format!(
                "इंजन से {} आवाज़ और {} धुआं देखा गया है।\n",
                record.engine_sound, record.exhaust_smoke
            ));
            report.push_str(&format!("इंजन अभी {} स्थिति में है।\n\n", record.status));

            report.push_str("[2. बॉडी और सुरक्षा]\n");
            report.push_str(&format!(
                "एक्सीडेंट इतिहास: {}। बॉडी कंडीशन {}% है।\n\n",
                record.accident_history, record.body_condition_percent
            ));

            report.push_str("[3. आपकी बताई समस्याओं पर रिपोर्ट]\n");
            for advisory in &record.advisories {
                report.push_str(advisory);
                report.push('\n');
            }
            report.push('\n');

            report.push_str("[4. सर्विस सलाह]\n");
            report.push_str(&format!(
                "  अगली सर्विस:  {} दिनों के भीतर\n",
                record.maintenance_window_days
            ));
            report.push_str(&format!("  मुख्य कार्य:   {} पर ध्यान दें\n", record.recommended_parts));
            report.push_str(&format!("  निष्कर्ष:      {}\n", record.verdict));
        }
    }
    report.push_str("==================================================\n");
    report
}

/// Render the fleet analytics report
pub fn generate_fleet_report(summary: &FleetSummary, lang: Language) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    match lang {
        Language::English => {
            report.push_str("       Fleet Analytics & Intelligence Report\n");
            report.push_str("==================================================\n");
            report.push_str(&format!("Records analyzed:  {}\n", summary.total_records));
            report.push_str(&format!(
                "Fleet Overview:    average health score is {}%\n",
                summary.average_health
            ));
            report.push_str(&format!(
                "Critical Risks:    {:.1}% of the fleet shows degradation in {}\n",
                summary.risk_percent, summary.common_part
            ));
            report.push_str(&format!(
                "Market Pattern:    models older than {} months are reporting higher risk levels\n",
                summary.age_limit_months
            ));
            report.push_str(&format!(
                "Solution:          bulk inspection of {} is recommended\n",
                summary.solution
            ));
        }
        Language::Hindi => {
            report.push_str("     फ्लीट इंटेलिजेंस और एनालिसिस रिपोर्ट\n");
            report.push_str("==================================================\n");
            report.push_str(&format!("रिकॉर्ड:   {}\n", summary.total_records));
            report.push_str(&format!(
                "सारांश:    पूरी फ्लीट का औसत स्वास्थ्य स्कोर {}% है\n",
                summary.average_health
            ));
            report.push_str(&format!(
                "जोखिम:     {:.1}% वाहनों में {} की समस्या है\n",
                summary.risk_percent, summary.common_part
            ));
            report.push_str(&format!(
                "समाधान:    हम {} के सामूहिक निरीक्षण की सलाह देते हैं\n",
                summary.solution
            ));
        }
    }
    report.push_str("==================================================\n");
    report
}
