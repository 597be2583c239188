use crate::models::domain::{OptionLetter, QuizOptions, QuizQuestion};

pub const QUIZ_PROMPT: &str = r#"Bạn là giáo viên chuyên về Lịch sử Đảng Cộng sản Việt Nam. Tạo một câu hỏi trắc nghiệm mới về Lịch sử Đảng với 4 đáp án A, B, C, D.

Yêu cầu:
- 1 đáp án đúng duy nhất
- Đáp án rõ ràng, không gây nhầm lẫn
- Giải thích chi tiết nhưng không quá dài

QUAN TRỌNG: Chỉ trả về JSON, không có text khác trước hoặc sau JSON.

Format JSON:
{
  "question": "Câu hỏi về Lịch sử Đảng",
  "options": {
    "A": "Đáp án A",
    "B": "Đáp án B",
    "C": "Đáp án C",
    "D": "Đáp án D"
  },
  "correctAnswer": "A",
  "explanation": "Giải thích chi tiết nhưng không quá dài"
}"#;

/// Served whenever a generated question cannot be recovered from model output.
pub fn fallback_question() -> QuizQuestion {
    QuizQuestion {
        question: "Đảng Cộng sản Việt Nam được thành lập vào ngày tháng năm nào?".to_string(),
        options: QuizOptions {
            a: "3/2/1930".to_string(),
            b: "19/5/1890".to_string(),
            c: "2/9/1945".to_string(),
            d: "7/5/1954".to_string(),
        },
        correct_answer: OptionLetter::A,
        explanation: "Đảng Cộng sản Việt Nam được thành lập ngày 3/2/1930 tại Hương Cảng (Trung Quốc), \
            tại hội nghị hợp nhất các tổ chức cộng sản do lãnh tụ Nguyễn Ái Quốc chủ trì."
            .to_string(),
    }
}
