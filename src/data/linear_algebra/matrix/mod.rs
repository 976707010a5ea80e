//! # Matrix types
//!
//! A sparse matrix, storing only the values that were written to it.
pub use sparse::Iter as SparseMatrixIter;
pub use sparse::Sparse as SparseMatrix;

mod sparse;

#[cfg(test)]
#[allow(dead_code)]
pub mod test {
    //! Contains also some helper methods to be used in other test modules.

    use num_traits::{FromPrimitive, ToPrimitive, Zero};

    use crate::data::linear_algebra::matrix::SparseMatrix;
    use crate::data::linear_algebra::traits::Element;
    use crate::data::linear_algebra::vector::test::f;

    impl<F: Element + FromPrimitive> SparseMatrix<F> {
        /// Create a `SparseMatrix` from dense, row major test data, storing only the nonzero
        /// values.
        pub fn from_test_data<T: ToPrimitive + Zero>(data: Vec<Vec<T>>) -> Self {
            let nr_rows = data.len();
            let nr_columns = data.first().map_or(0, Vec::len);
            debug_assert!(data.iter().all(|row| row.len() == nr_columns));

            Self::from_triplets(
                data.into_iter()
                    .enumerate()
                    .flat_map(|(i, row)| {
                        row.into_iter()
                            .enumerate()
                            .filter(|(_, v)| !v.is_zero())
                            .map(move |(j, v)| ((i, j), f(v)))
                    })
                    .collect(),
                nr_rows,
                nr_columns,
            ).unwrap()
        }
    }

    /// A test matrix used in tests.
    fn get_test_matrix<F: Element + FromPrimitive>() -> SparseMatrix<F> {
        SparseMatrix::from_test_data(vec![
            vec![1, 2, 0],
            vec![0, 5, 6],
        ])
    }

    /// Test
    fn get_set<F: Element + FromPrimitive + PartialEq>() {
        let mut m = get_test_matrix::<F>();

        // Getting a zero value
        assert_eq!(m.get(0, 2), F::zero());

        // Getting a nonzero value
        assert_eq!(m.get(0, 1), f::<F, _>(2));

        // Setting to the same value doesn't change
        let v = m.get(0, 1);
        m.set(0, 1, v.clone()).unwrap();
        assert_eq!(m.get(0, 1), v);
        assert_eq!(m.nr_stored(), 4);

        // Changing a value
        m.set(1, 1, f(3)).unwrap();
        assert_eq!(m.get(1, 1), f::<F, _>(3));
        assert_eq!(m.nr_stored(), 4);
    }

    /// Test
    fn add<F: Element + FromPrimitive + PartialEq>() {
        let m = get_test_matrix::<F>();
        let n = SparseMatrix::<F>::from_test_data(vec![
            vec![0, -2, 7],
            vec![1, 0, 0],
        ]);

        let sum = m.checked_add(&n).unwrap();
        assert_eq!(sum.shape(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                let mut expected = m.get(i, j);
                expected += n.get(i, j);
                assert_eq!(sum.get(i, j), expected);
            }
        }
        // (0, 1) cancels but stays stored
        assert_eq!(sum.nr_stored(), 6);

        assert_eq!(sum, n.checked_add(&m).unwrap());
    }

    /// Test
    fn transpose<F: Element + FromPrimitive + PartialEq>() {
        let m = get_test_matrix::<F>();
        let t = m.transpose();

        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.nr_stored(), m.nr_stored());
        assert_eq!(
            t,
            SparseMatrix::<F>::from_test_data(vec![
                vec![1, 0],
                vec![2, 5],
                vec![0, 6],
            ]),
        );
        assert_eq!(t.transpose(), m);
    }

    mod sparse_matrix {
        use crate::data::linear_algebra::matrix::test::{add, get_set, transpose};

        #[test]
        fn test_get_set() {
            get_set::<f64>();
            get_set::<i32>();
        }

        #[test]
        fn test_add() {
            add::<f64>();
            add::<i32>();
            add::<i64>();
        }

        #[test]
        fn test_transpose() {
            transpose::<f64>();
            transpose::<i64>();
        }
    }
}
