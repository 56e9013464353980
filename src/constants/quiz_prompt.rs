pub const QUIZ_MAX_TOKENS: u32 = 4000;
pub const QUIZ_TEMPERATURE: f32 = 0.7;

pub fn quiz_generation_prompt(topic: &str, difficulty: i64, count: u32) -> String {
    format!(
        "주제: {topic}
난이도: {difficulty}/5 (1=쉬움, 5=매우어려움)
개수: {count}개

{topic}에 대한 난이도 {difficulty} 수준의 객관식 퀴즈를 {count}개 생성해.

**중요:**
- 난이도 {difficulty}에 맞는 문제 출제
- 선택지는 A, B, C, D 네 개
- 정답은 반드시 하나만, 선택지 중 하나와 글자 그대로 같게
- 해설은 구체적으로
- 반드시 {count}개를 생성

JSON 배열만 출력:
[
  {{
    \"question\": \"문제\",
    \"options\": [\"선택지A\", \"선택지B\", \"선택지C\", \"선택지D\"],
    \"correctAnswer\": \"선택지A\",
    \"explanation\": \"해설\"
  }}
]

JSON만 출력, 마크다운 없이:"
    )
}
