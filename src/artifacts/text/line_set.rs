use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    None,
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Line {
    content: String,
    ending: LineEnding,
}

impl Line {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }
}

/// The physical lines of a decoded file.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Lines are compared and
/// displayed without their terminator, which is kept aside so the original
/// text can be rebuilt byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    lines: Vec<Line>,
}

impl LineSet {
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;

        while let Some(at) = rest.find(['\n', '\r']) {
            let (content, tail) = rest.split_at(at);
            let (ending, skip) = if tail.starts_with("\r\n") {
                (LineEnding::CrLf, 2)
            } else if tail.starts_with('\r') {
                (LineEnding::Cr, 1)
            } else {
                (LineEnding::Lf, 1)
            };
            lines.push(Line::new(content.to_string(), ending));
            rest = &tail[skip..];
        }
        if !rest.is_empty() {
            lines.push(Line::new(rest.to_string(), LineEnding::None));
        }

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(Line::content)
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}{}", line.content, line.ending.as_str()))
            .collect()
    }
}
