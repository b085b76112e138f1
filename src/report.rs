// PDF export of a quiz or a graded result, assembled with lopdf.

use color_eyre::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::grader::GradedDetail;
use crate::models::QuizQuestion;

// A4 portrait, Helvetica, line-based layout.
const FONT_SIZE: i64 = 11;
const LEADING: i64 = 15;
const MARGIN: i64 = 50;
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const LINES_PER_PAGE: usize = 49;
const WRAP_COLS: usize = 95;

/// Questions and options only, for taking the quiz on paper.
pub fn quiz_pdf(title: &str, questions: &[QuizQuestion]) -> Result<Vec<u8>> {
    let mut blocks = vec![vec![title.to_string(), String::new()]];

    for (i, q) in questions.iter().enumerate() {
        let mut block = wrap(&format!("Q{}. {}", i + 1, q.question));
        for (j, opt) in q.options.iter().enumerate() {
            block.extend(wrap(&format!("    {}) {}", option_letter(j), opt)));
        }
        block.push(String::new());
        blocks.push(block);
    }

    render(blocks)
}

/// Full graded report: name and score summary, then each question with the
/// submitted answer, the correct answer, and the explanation.
pub fn result_pdf(
    title: &str,
    user_name: &str,
    score: i64,
    total: i64,
    details: &[GradedDetail],
) -> Result<Vec<u8>> {
    let mut blocks = vec![vec![
        title.to_string(),
        format!("Name: {user_name}"),
        format!("Score: {score} / {total}"),
        String::new(),
    ]];

    for (i, d) in details.iter().enumerate() {
        let mut block = wrap(&format!("Q{}. {}", i + 1, d.question));
        for (j, opt) in d.options.iter().enumerate() {
            block.extend(wrap(&format!("    {}) {}", option_letter(j), opt)));
        }
        let submitted = if d.user_answer.is_empty() {
            "(no answer)"
        } else {
            &d.user_answer
        };
        let verdict = if d.is_correct { "correct" } else { "incorrect" };
        block.extend(wrap(&format!("Your answer: {submitted} [{verdict}]")));
        block.extend(wrap(&format!("Correct answer: {}", d.correct_answer)));
        block.extend(wrap(&format!("Explanation: {}", d.explanation)));
        block.push(String::new());
        blocks.push(block);
    }

    render(blocks)
}

fn option_letter(idx: usize) -> char {
    (b'A' + idx as u8) as char
}

/// Word-wrap to the column budget; overlong words are split rather than
/// overflowing the page.
fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current_len > 0 && current_len + 1 + word_len > WRAP_COLS {
            lines.push(std::mem::take(&mut current));
        }

        if word_len > WRAP_COLS {
            let mut chunk = String::new();
            for c in word.chars() {
                if chunk.chars().count() == WRAP_COLS {
                    lines.push(std::mem::take(&mut chunk));
                }
                chunk.push(c);
            }
            current = chunk;
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Lay blocks out over pages. A block that fits on one page is never split
/// across a boundary; a block longer than a page continues onto the next so
/// nothing is dropped.
fn paginate(blocks: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    let mut page: Vec<String> = Vec::new();

    for block in blocks {
        if !page.is_empty()
            && page.len() + block.len() > LINES_PER_PAGE
            && block.len() <= LINES_PER_PAGE
        {
            pages.push(std::mem::take(&mut page));
        }
        for line in block {
            if page.len() == LINES_PER_PAGE {
                pages.push(std::mem::take(&mut page));
            }
            page.push(line);
        }
    }

    if !page.is_empty() {
        pages.push(page);
    }
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

fn render(blocks: Vec<Vec<String>>) -> Result<Vec<u8>> {
    let pages = paginate(blocks);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in &pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
        ];
        for line in lines {
            if !line.is_empty() {
                operations.push(Operation::new("Tj", vec![Object::string_literal(line.clone())]));
            }
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}
