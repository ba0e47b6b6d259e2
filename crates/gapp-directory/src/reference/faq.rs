use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

static FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "What is the Georgia Pediatric Program (GAPP)?",
        answer: "GAPP is a Georgia Medicaid program that pays for in-home skilled nursing and \
                 personal care for medically fragile children under 21.",
    },
    FaqEntry {
        question: "Does my child need Medicaid to receive GAPP services?",
        answer: "Yes. Your child must have active Georgia Medicaid, which can include the Katie \
                 Beckett (TEFRA) pathway for children who qualify on medical need.",
    },
    FaqEntry {
        question: "What is the difference between RN, LPN, and PCS care?",
        answer: "RNs and LPNs provide skilled nursing such as trach care or tube feeds. Personal \
                 care services cover bathing, dressing, and other daily living support.",
    },
    FaqEntry {
        question: "Who decides how many hours we receive?",
        answer: "Hours are approved by the state after reviewing your physician's orders and the \
                 agency's nursing assessment. They are reviewed periodically.",
    },
    FaqEntry {
        question: "What should I do if our approved hours were reduced?",
        answer: "Ask your care coordinator for the written notice, request a reconsideration, and \
                 gather updated documentation from your pediatrician.",
    },
    FaqEntry {
        question: "What does a verified listing mean?",
        answer: "Verified agencies have confirmed their contact details and the counties they \
                 serve with our team by phone.",
    },
];

pub fn faq_entries() -> &'static [FaqEntry] {
    &FAQ
}
