use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::error::DataError;
use crate::streams::Stream;
use crate::utils::file_parsing::{is_blank, parse_integer, split_fields};

type Row = Result<(usize, String), DataError>;

/// Reads a whitespace-delimited table: a header line naming the attributes
/// (label last) followed by rows of integers. Blank lines are skipped.
pub struct TableFileStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    pending: Option<Row>,
}

impl TableFileStream {
    /// Opens `path` and takes the schema from its header line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        let mut lines = BufReader::new(File::open(&path)?).lines();
        let mut line_no = 0;

        let (_, header_line) =
            next_non_blank(&mut lines, &mut line_no)?.ok_or(DataError::EmptyInput)?;
        let header = InstanceHeader::from_names(&relation_name(&path), split_fields(&header_line))?;

        info!(
            path = %path.display(),
            attributes = header.number_of_attributes(),
            "opened table"
        );
        Self::start(path, Arc::new(header), lines, line_no)
    }

    /// Opens `path` but decodes its rows against `header`.
    ///
    /// The file's own header line must name as many columns as `header`;
    /// when the names differ, `header` wins.
    pub fn open_with_header<P: AsRef<Path>>(
        path: P,
        header: Arc<InstanceHeader>,
    ) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        let mut lines = BufReader::new(File::open(&path)?).lines();
        let mut line_no = 0;

        let (at, header_line) =
            next_non_blank(&mut lines, &mut line_no)?.ok_or(DataError::EmptyInput)?;
        let names = split_fields(&header_line);
        if names.len() != header.number_of_attributes() {
            return Err(DataError::ColumnCount {
                line: at,
                expected: header.number_of_attributes(),
                found: names.len(),
            });
        }
        if !names.iter().copied().eq(header.names()) {
            warn!(
                path = %path.display(),
                found = %names.join(" "),
                "header differs from the given schema, using the given schema"
            );
        }

        info!(
            path = %path.display(),
            attributes = header.number_of_attributes(),
            "opened table with shared schema"
        );
        Self::start(path, header, lines, line_no)
    }

    fn start(
        path: PathBuf,
        header: Arc<InstanceHeader>,
        lines: Lines<BufReader<File>>,
        line_no: usize,
    ) -> Result<Self, DataError> {
        let mut stream = TableFileStream {
            path,
            header,
            lines,
            line_no,
            pending: None,
        };
        stream.prefetch();
        Ok(stream)
    }

    fn prefetch(&mut self) {
        self.pending = next_non_blank(&mut self.lines, &mut self.line_no).transpose();
    }

    fn decode(&self, line: usize, text: &str) -> Result<DenseInstance, DataError> {
        let mut raw = Vec::with_capacity(self.header.number_of_attributes());
        for token in split_fields(text) {
            let value = parse_integer(token).ok_or_else(|| DataError::InvalidValue {
                line,
                token: token.to_string(),
            })?;
            raw.push(value);
        }
        DenseInstance::from_raw(Arc::clone(&self.header), &raw, line)
    }
}

impl Stream for TableFileStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn header_arc(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some()
    }

    fn next_instance(&mut self) -> Option<Result<DenseInstance, DataError>> {
        match self.pending.take()? {
            Ok((line, text)) => {
                self.prefetch();
                Some(self.decode(line, &text))
            }
            Err(e) => Some(Err(e)),
        }
    }

    fn restart(&mut self) -> Result<(), DataError> {
        self.lines = BufReader::new(File::open(&self.path)?).lines();
        self.line_no = 0;
        next_non_blank(&mut self.lines, &mut self.line_no)?.ok_or(DataError::EmptyInput)?;
        self.prefetch();
        Ok(())
    }
}

fn next_non_blank(
    lines: &mut Lines<BufReader<File>>,
    line_no: &mut usize,
) -> Result<Option<(usize, String)>, DataError> {
    for line in lines.by_ref() {
        let line = line?;
        *line_no += 1;
        if !is_blank(&line) {
            return Ok(Some((*line_no, line)));
        }
    }
    Ok(None)
}

fn relation_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassLabel;
    use crate::core::Dataset;
    use crate::classifiers::ProbabilityTable;
    use crate::core::instances::Instance;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(contents: &str) -> NamedTempFile {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(contents.as_bytes()).unwrap();
        tf.flush().unwrap();
        tf
    }

    #[test]
    fn reads_header_and_rows_skipping_blank_lines() {
        let tf = table("\nwesley honor barclay class\n1 0 1 1\n\n   \n0 0 0 0\n");
        let mut s = TableFileStream::open(tf.path()).unwrap();

        let h = s.header();
        assert_eq!(h.number_of_attributes(), 4);
        assert_eq!(h.class_attribute().name(), "class");

        let first = s.next_instance().unwrap().unwrap();
        assert_eq!(first.to_vec(), vec![1, 0, 1, 1]);
        assert_eq!(first.class_value(), ClassLabel::One);
        assert!(s.has_more_instances());

        let second = s.next_instance().unwrap().unwrap();
        assert_eq!(second.to_vec(), vec![0, 0, 0, 0]);
        assert!(!s.has_more_instances());
        assert!(s.next_instance().is_none());
    }

    #[test]
    fn empty_file_is_rejected() {
        let tf = table("\n  \n");
        assert!(matches!(
            TableFileStream::open(tf.path()),
            Err(DataError::EmptyInput)
        ));
    }

    #[test]
    fn header_only_file_has_no_instances() {
        let tf = table("a class\n");
        let s = TableFileStream::open(tf.path()).unwrap();
        assert!(!s.has_more_instances());
    }

    #[test]
    fn bad_tokens_carry_physical_line_numbers() {
        let tf = table("a class\n\n1 x\n");
        let mut s = TableFileStream::open(tf.path()).unwrap();
        let err = s.next_instance().unwrap().unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { line: 3, ref token } if token == "x"));

        let tf = table("a class\n1 0 1\n");
        let mut s = TableFileStream::open(tf.path()).unwrap();
        let err = s.next_instance().unwrap().unwrap_err();
        assert!(matches!(
            err,
            DataError::ColumnCount {
                line: 2,
                expected: 2,
                found: 3
            }
        ));

        let tf = table("a class\n3 0\n");
        let mut s = TableFileStream::open(tf.path()).unwrap();
        let err = s.next_instance().unwrap().unwrap_err();
        assert!(matches!(err, DataError::NonBinaryValue { line: 2, value: 3, .. }));
    }

    #[test]
    fn shared_header_replaces_file_header() {
        let train = table("a b class\n0 1 1\n");
        let s = TableFileStream::open(train.path()).unwrap();
        let header = s.header_arc();

        let test = table("x y label\n1 1 0\n");
        let mut t = TableFileStream::open_with_header(test.path(), Arc::clone(&header)).unwrap();
        assert_eq!(t.header().class_attribute().name(), "class");
        let inst = t.next_instance().unwrap().unwrap();
        assert!(inst.header().same_schema(&header));
    }

    #[test]
    fn shared_header_requires_matching_width() {
        let train = table("a b class\n0 1 1\n");
        let header = TableFileStream::open(train.path()).unwrap().header_arc();

        let test = table("a class\n1 0\n");
        assert!(matches!(
            TableFileStream::open_with_header(test.path(), header),
            Err(DataError::ColumnCount {
                line: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn restart_replays_rows() {
        let tf = table("a class\n0 0\n1 1\n");
        let mut s = TableFileStream::open(tf.path()).unwrap();
        let first = Dataset::from_stream(&mut s).unwrap();
        s.restart().unwrap();
        let second = Dataset::from_stream(&mut s).unwrap();
        assert_eq!(first.len(), 2);
        let a: Vec<Vec<u8>> = first.iter().map(|i| i.to_vec()).collect();
        let b: Vec<Vec<u8>> = second.iter().map(|i| i.to_vec()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn loaded_rows_share_the_table_header() {
        let tf = table("a class\n0 0\n1 1\n");
        let mut s = TableFileStream::open(tf.path()).unwrap();
        let ds = Dataset::from_stream(&mut s).unwrap();
        let t = ProbabilityTable::build(&ds);
        for inst in &ds {
            assert!(std::ptr::eq(inst.header(), t.header()));
        }
    }
}
