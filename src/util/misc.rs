use std::fmt;
use std::io::Write;
use std::path::Path;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> Res<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it.next().ok_or_else(|| format!("{}: value missing", opt))?;
    n.parse()
        .map_err(|e| format!("{}: {} '{}'", opt, e, n).into())
}

fn create_parent_dir(path: &Path) -> Res<&Path> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    Ok(dir)
}

// 同じディレクトリの一時ファイルに書き込んでから置き換える
pub fn write_to_file(file_path: &str, data: &[u8]) -> Res {
    let path = Path::new(file_path);
    let dir = create_parent_dir(path)?;
    let mut f = tempfile::NamedTempFile::new_in(dir)?;
    f.write_all(data)?;
    f.flush()?;
    f.persist(path)?;
    Ok(())
}

pub fn copy_file(src: &str, dst: &str) -> Res<u64> {
    let dst = Path::new(dst);
    create_parent_dir(dst)?;
    Ok(std::fs::copy(src, dst)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_value() {
        let args: Vec<String> = vec!["out.json".to_string(), "x".to_string()];
        let mut it = args.iter();
        let s: String = next_value(&mut it, "-o").unwrap();
        assert_eq!(s, "out.json");
        assert!(next_value::<usize>(&mut it, "-n").is_err());
        assert!(next_value::<String>(&mut it, "-o").is_err());
    }

    #[test]
    fn test_write_and_copy() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a/b/out.json");
        let out = out.to_str().unwrap();
        write_to_file(out, b"first").unwrap();
        write_to_file(out, b"second").unwrap();
        assert_eq!(std::fs::read(out).unwrap(), b"second");

        let dst = dir.path().join("c/copy.json");
        let dst = dst.to_str().unwrap();
        assert_eq!(copy_file(out, dst).unwrap(), 6);
        assert_eq!(std::fs::read(dst).unwrap(), b"second");
    }
}
